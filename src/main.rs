//! authgate - session login, artifact codec and route guard for a token authority

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod session;

use cli::{Cli, Commands, GlobalOptions, SessionCommands};
use error::Result;

/// Exit status when the guard denies access
const EXIT_DENIED: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_DENIED),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("authgate", log::LevelFilter::Debug);
    }
    builder.init();
}

/// Dispatch the command; `Ok(false)` means access was denied.
async fn run(cli: Cli) -> Result<bool> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { username, secret } => {
            cli::login::run(&opts, username, secret).await?;
        }
        Commands::Check { session } => return cli::check::run(&opts, session).await,
        Commands::Status => cli::status::run(&opts)?,
        Commands::Logout => cli::logout::run(&opts)?,
        Commands::Expire => cli::expire::run(&opts).await?,
        Commands::Session(cmd) => match cmd {
            SessionCommands::Encode { id, content } => cli::session::encode(&opts, id, content)?,
            SessionCommands::Decode { artifact } => cli::session::decode(&opts, &artifact)?,
        },
        Commands::Version => println!("authgate version {}", env!("CARGO_PKG_VERSION")),
    }

    Ok(true)
}
