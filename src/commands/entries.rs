//! Entry commands
//! 条目相关命令

use clap::{Args, Subcommand};
use jn_core::input::keys;
use serde_json::{json, Map, Value};
use tracing::info_span;
use tracing::Instrument;

use crate::bootstrap::AppRuntime;
use crate::commands::CommandError;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List entries with filters, sorting and pagination
    List(ListArgs),
    /// Add a new entry
    Add(AddArgs),
    /// Show one entry
    Get(IdArgs),
    /// Delete one entry
    Delete(IdArgs),
}

/// Flags are passed through as text; the use case normalizes and validates.
#[derive(Debug, Default, Args)]
pub struct ListArgs {
    #[arg(long)]
    page: Option<String>,
    #[arg(long)]
    per_page: Option<String>,
    /// date, createdAt, updatedAt or title
    #[arg(long)]
    sort_field: Option<String>,
    /// ASC or DESC
    #[arg(long)]
    sort_dir: Option<String>,
    /// Only entries on this day (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    date_from: Option<String>,
    #[arg(long)]
    date_to: Option<String>,
    /// Case-insensitive text in title or body
    #[arg(long)]
    query: Option<String>,
    /// Raw request object; flags override its keys
    #[arg(long)]
    json: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct AddArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    body: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    date: Option<String>,
    /// Raw request object; flags override its keys
    #[arg(long)]
    json: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct IdArgs {
    #[arg(long)]
    id: Option<String>,
    /// Raw request object; flags override its keys
    #[arg(long)]
    json: Option<String>,
}

/// Start from `--json` (or `{}`) and set every given flag on top.
///
/// A `--json` value that is valid JSON but not an object is passed through
/// untouched so the validators can reject it.
fn build_payload(json: Option<&str>, flags: &[(&str, &Option<String>)]) -> Result<Value, CommandError> {
    let mut raw = match json {
        Some(text) => serde_json::from_str(text)
            .map_err(|e| CommandError::MalformedPayload(e.to_string()))?,
        None => Value::Object(Map::new()),
    };

    if let Value::Object(object) = &mut raw {
        for (key, value) in flags {
            if let Some(value) = value {
                object.insert((*key).to_string(), Value::String(value.clone()));
            }
        }
    }

    Ok(raw)
}

impl ListArgs {
    fn payload(&self) -> Result<Value, CommandError> {
        build_payload(
            self.json.as_deref(),
            &[
                (keys::PAGE, &self.page),
                (keys::PER_PAGE, &self.per_page),
                (keys::SORT_FIELD, &self.sort_field),
                (keys::SORT_DIR, &self.sort_dir),
                (keys::DATE, &self.date),
                (keys::DATE_FROM, &self.date_from),
                (keys::DATE_TO, &self.date_to),
                (keys::QUERY, &self.query),
            ],
        )
    }
}

impl AddArgs {
    fn payload(&self) -> Result<Value, CommandError> {
        build_payload(
            self.json.as_deref(),
            &[
                (keys::TITLE, &self.title),
                (keys::BODY, &self.body),
                (keys::DATE, &self.date),
            ],
        )
    }
}

impl IdArgs {
    fn payload(&self) -> Result<Value, CommandError> {
        build_payload(self.json.as_deref(), &[(keys::ID, &self.id)])
    }
}

fn to_output<T: serde::Serialize>(value: T) -> Result<Value, CommandError> {
    serde_json::to_value(value)
        .map_err(|e| CommandError::Infrastructure(format!("failed to encode output: {}", e)))
}

/// Run one command and return its JSON output.
pub async fn run(runtime: &AppRuntime, command: Command) -> Result<Value, CommandError> {
    match command {
        Command::List(args) => {
            let raw = args.payload()?;
            let span = info_span!("command.list_entries");
            let result = runtime
                .usecases()
                .list_entries()
                .execute(&raw)
                .instrument(span)
                .await?;
            to_output(result)
        }
        Command::Add(args) => {
            let raw = args.payload()?;
            let span = info_span!("command.add_entry");
            let view = runtime
                .usecases()
                .add_entry()
                .execute(&raw)
                .instrument(span)
                .await?;
            to_output(view)
        }
        Command::Get(args) => {
            let raw = args.payload()?;
            let span = info_span!("command.get_entry");
            let view = runtime
                .usecases()
                .get_entry()
                .execute(&raw)
                .instrument(span)
                .await?;
            to_output(view)
        }
        Command::Delete(args) => {
            let raw = args.payload()?;
            let span = info_span!("command.delete_entry");
            let id = runtime
                .usecases()
                .delete_entry()
                .execute(&raw)
                .instrument(span)
                .await?;
            Ok(json!({ "deleted": id }))
        }
    }
}
