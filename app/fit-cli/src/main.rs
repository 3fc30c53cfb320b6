//! fitsync - identity reconciliation CLI
//!
//! # Examples
//!
//! ```bash
//! # Reconcile an identity into the local store
//! fitsync sync --identity-id user_123 --email jordan@example.com --name Jordan --pretty
//!
//! # Look the record up again
//! fitsync user show --identity-id user_123
//! ```

mod cli;
mod commands;

use crate::{
    cli::Cli,
    commands::{Commands, UserCommands},
};

use fit_cli::{Result as CliResult, SyncArgs, logger};
use fit_config::Config;
use fit_db::UserStore;
use fit_sync::RetryPolicy;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening database {}", database_path.display());
    let store = UserStore::new(fit_db::connect(&database_path).await?);

    let (value, succeeded) = match cli.command {
        Commands::Sync {
            identity_id,
            emails,
            primary_email,
            name,
        } => {
            let args = SyncArgs {
                identity_id,
                emails,
                primary_email,
                name,
            };
            let snapshot =
                fit_cli::run_sync(&store, &args, RetryPolicy::from(&config.sync)).await?;
            let complete = snapshot.is_complete();
            (serde_json::to_value(&snapshot)?, complete)
        }
        Commands::User { action } => {
            let record = match action {
                UserCommands::Show { identity_id } => {
                    fit_cli::show_user(&store, &identity_id).await?
                }
                UserCommands::Get { id } => fit_cli::get_user(&store, id).await?,
                UserCommands::Rename { identity_id, name } => {
                    fit_cli::rename_user(&store, &identity_id, name.as_deref()).await?
                }
            };
            (serde_json::to_value(&record)?, true)
        }
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", output);

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
