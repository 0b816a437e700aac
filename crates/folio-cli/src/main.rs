use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;
#[cfg(test)]
mod tests;

use crate::cli_args::{Cli, Command};
use crate::cli_command::handle_command;
use crate::modules::auth::{handle_login, handle_logout};
use crate::modules::system::{credentials_path, session_path, SessionStateFile};
use folio_client::{ApiClient, CredentialStore, FileBackend};

pub(crate) const DEFAULT_ADDR: &str = "http://127.0.0.1:4000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let http = reqwest::Client::builder().build()?;
    let addr = cli.addr.clone().unwrap_or_else(|| DEFAULT_ADDR.to_string());
    let store = CredentialStore::new(Box::new(FileBackend::new(credentials_path()?)))
        .with_sink(Box::new(SessionStateFile::new(session_path()?)));
    let api = ApiClient::new(http, addr, Arc::new(store));

    match cli.command {
        Command::Login(args) => handle_login(args, &api).await?,
        Command::Logout => handle_logout(&api).await?,
        command => handle_command(command, &api).await?,
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .init();
    Ok(())
}
