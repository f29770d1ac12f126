//! CLI smoke entry point.
//!
//! # Responsibility
//! - Post and list chirps against a local SQLite file without a server.
//! - Print JSON:API documents to stdout and errors to stderr.
//!
//! Usage:
//!   chirper_cli <db_path> post <author> <text>
//!   chirper_cli <db_path> post-json <document>
//!   chirper_cli <db_path> list

use chirper_core::db::open_db;
use chirper_core::{ChirpService, SqlitePersistenceDriver};
use log::info;
use serde_json::json;
use std::process::ExitCode;
use uuid::Uuid;

const USAGE: &str = "usage: chirper_cli <db_path> (post <author> <text> | post-json <document> | list)";
const LOG_DIR_ENV: &str = "CHIRPER_LOG_DIR";
const LOG_LEVEL_ENV: &str = "CHIRPER_LOG_LEVEL";

fn main() -> ExitCode {
    init_logging_from_env();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<String, String> {
    let (db_path, command) = match args {
        [db_path, command @ ..] if !command.is_empty() => (db_path, command),
        _ => return Err(USAGE.to_string()),
    };

    let conn = open_db(db_path).map_err(|err| format!("failed to open `{db_path}`: {err}"))?;
    let service = ChirpService::new(SqlitePersistenceDriver::new(&conn));
    info!("event=cli_command module=cli status=start command={}", command[0]);

    match command {
        [cmd, author, text] if cmd == "post" => {
            let document = json!({
                "data": {
                    "type": "chirp",
                    "id": Uuid::new_v4().to_string(),
                    "attributes": { "text": text, "author": author }
                }
            });
            service
                .publish(&document.to_string())
                .map_err(|err| err.to_string())
        }
        [cmd, document] if cmd == "post-json" => {
            service.publish(document).map_err(|err| err.to_string())
        }
        [cmd] if cmd == "list" => service.timeline().map_err(|err| err.to_string()),
        _ => Err(USAGE.to_string()),
    }
}

// File logging is opt-in: only when a log directory is configured.
fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let level = std::env::var(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| chirper_core::default_log_level().to_string());

    if let Err(err) = chirper_core::init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}
