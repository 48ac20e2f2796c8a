mod bootstrap;
mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use bootstrap::{resolve_config, wire_dependencies, AppRuntime, StorageMode};
use commands::Command;

#[derive(Parser)]
#[command(name = "journal")]
#[command(about = "Journal entries: list, add, get and delete", long_about = None)]
struct Cli {
    /// TOML config file (defaults to the platform data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep entries in memory for this run only
    #[arg(long, global = true)]
    in_memory: bool,

    #[command(subcommand)]
    command: Command,
}

/// Infrastructure failures before a command runs, e.g. an unreadable config.
fn fail(message: String) -> ExitCode {
    let body = serde_json::json!({ "kind": "infrastructure", "message": message });
    eprintln!("{}", body);
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(cli.config) {
        Ok(config) => config,
        Err(err) => return fail(format!("{:#}", err)),
    };

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber(&config) {
        eprintln!("Failed to initialize tracing: {:#}", err);
    }

    let mode = if cli.in_memory {
        StorageMode::InMemory
    } else {
        StorageMode::Sqlite
    };
    let deps = match wire_dependencies(&config, mode) {
        Ok(deps) => deps,
        Err(err) => {
            error!(error = %err, "Failed to wire dependencies");
            return fail(err.to_string());
        }
    };
    let runtime = AppRuntime::new(deps);

    match commands::run(&runtime, cli.command).await {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(err) => fail(format!("failed to encode output: {}", err)),
        },
        Err(err) => {
            error!(kind = err.kind(), error = %err, "Command failed");
            eprintln!("{}", err.to_json());
            ExitCode::from(&err)
        }
    }
}
