//! On-disk session artifact storage for the CLI
//!
//! Plays the role a cookie jar plays for a browser: it keeps the artifact
//! between invocations. The guard never reads it directly; commands load the
//! artifact here and pass it in.

use std::path::{Path, PathBuf};

use crate::error::Result;

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored artifact. A missing or blank file is `None`.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let artifact = contents.trim();

        Ok((!artifact.is_empty()).then(|| artifact.to_string()))
    }

    /// Replace the stored artifact
    pub fn save(&self, artifact: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, format!("{}\n", artifact))?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        log::debug!("Stored session artifact at {}", self.path.display());
        Ok(())
    }

    /// Remove the stored artifact. Returns whether one existed.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&self.path)?;
        Ok(true)
    }
}
