//! roster - local-first user directory client
//!
//! Lists and edits users from a remote REST API. Local additions, edits and
//! deletions are kept in `.roster/overlay/` and layered over the server data.
//!
//! # Examples
//!
//! ```bash
//! # Second page of users matching "ann", ten per page
//! roster list --query ann --page 2 --page-size 10 --pretty
//!
//! # Create a user
//! roster create --name "Ann Lee" --username annlee --email ann@example.com
//!
//! # Change one field
//! roster edit 3 --city Lisbon
//! ```

use roster_cli::cli::Cli;
use roster_cli::commands::Commands;
use roster_cli::{AppError, AppErrorResult, Client, Session, logger};
use roster_config::Config;
use roster_core::UserDirectory;
use roster_store::FileOverlayStore;

use std::process::ExitCode;

use clap::Parser;
use log::info;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let output = run(cli).await.and_then(|value| render(&value, pretty));

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppErrorResult<Value> {
    // Load and validate configuration
    let mut config = Config::load()?;
    config.override_api_url(cli.api_url);
    config.validate()?;

    let log_file = match config.logging.file {
        Some(ref filename) => Some(Config::config_dir()?.join(filename)),
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    info!("Starting roster v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let client = Client::with_timeout(&config.api.base_url, config.api.timeout())?;

    let store = FileOverlayStore::new(config.storage_path()?);
    let mut session = Session::new(UserDirectory::hydrate(store), client);

    if !matches!(cli.command, Commands::Pending) {
        session.refresh().await;
    }

    let value = match cli.command {
        Commands::List {
            query,
            page,
            page_size,
        } => {
            let page_size = page_size.unwrap_or(config.pagination.default_page_size);
            if !config.pagination.allows(page_size) {
                return Err(AppError::invalid_page_size(
                    page_size,
                    &config.pagination.page_sizes,
                ));
            }
            serde_json::to_value(session.list(&query, page, page_size))?
        }
        Commands::Get { id } => serde_json::to_value(session.show(&id).await?)?,
        Commands::Create { fields } => serde_json::to_value(session.create(fields.draft()).await?)?,
        Commands::Edit { id, fields } => {
            let updated = session
                .edit_with(&id, |current| fields.patch_for(current))
                .await?;
            serde_json::to_value(updated)?
        }
        Commands::Delete { id } => {
            let newly_deleted = session.delete(&id).await;
            json!({ "id": id, "deleted": true, "alreadyDeleted": !newly_deleted })
        }
        Commands::Pending => serde_json::to_value(session.pending())?,
    };

    Ok(value)
}

fn render(value: &Value, pretty: bool) -> AppErrorResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
