//! Command execution context
//!
//! Loads configuration once, applies the global overrides, and builds the
//! authority client and session store every command needs.

use std::path::PathBuf;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::AuthorityClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::{RouteGuard, SessionStore};

pub struct CommandContext {
    /// Effective configuration (file merged with overrides)
    pub config: Config,
    /// Where the configuration was (or would be) loaded from
    pub config_path: PathBuf,
    /// Authority client; stateless, built without contacting the authority
    pub client: AuthorityClient,
    /// Stored session artifact
    pub store: SessionStore,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build the context from global options.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be parsed or the effective
    /// configuration is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let mut config =
            Config::load_at(opts.config_ref())?.with_authority(opts.authority_ref())?;

        if let Some(path) = opts.session_file_ref() {
            config.session_file = Some(PathBuf::from(path));
        }

        let client = AuthorityClient::new(config.authority_url.clone(), config.timeout())?;
        let store = SessionStore::new(config.session_path()?);

        Ok(Self {
            config,
            config_path,
            client,
            store,
            format: opts.format,
        })
    }

    /// Route guard bound to this context's authority and login path
    pub fn guard(&self) -> RouteGuard<'_, AuthorityClient> {
        RouteGuard::new(&self.client).with_login_path(self.config.login_path.clone())
    }
}
