use anyhow::Context;
use chartxo_core::CoreError;
use chartxo_core::responses::{DeleteScanResponse, HistoryRow};
use chartxo_core::time::format_time_ago;
use chartxo_store::AppState;
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryCommands;
use crate::output::output;

/// Handle `chartxo history`.
pub fn handle(action: &HistoryCommands, state: &mut AppState, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        HistoryCommands::List { limit } => output(&list_rows(state, *limit), flags.format),
        HistoryCommands::Show { id } => {
            let entry = state.find_scan(id).ok_or_else(|| CoreError::NotFound {
                entity_type: "scan".to_string(),
                id: id.clone(),
            })?;
            output(entry, flags.format)
        }
        HistoryCommands::Delete { id } => {
            let deleted = state
                .delete_scan(id)
                .with_context(|| format!("failed to delete scan {id}"))?;
            if !deleted {
                tracing::warn!(id = %id, "no scan with that id");
            }
            output(
                &DeleteScanResponse {
                    id: id.clone(),
                    deleted,
                    remaining: state.history().len(),
                },
                flags.format,
            )
        }
    }
}

/// Newest first, with the time column recomputed against now.
fn list_rows(state: &AppState, limit: Option<usize>) -> Vec<HistoryRow> {
    let now = Utc::now();
    state
        .history()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|entry| HistoryRow {
            time: format_time_ago(entry.created_at, now),
            ..HistoryRow::from(entry)
        })
        .collect()
}
