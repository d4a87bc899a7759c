use anyhow::Context;
use chartxo_core::{ImagePayload, UserProfile};
use chartxo_store::{AppState, StoreError};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::output::output;

/// Handle `chartxo profile`.
pub fn handle(action: &ProfileCommands, state: &mut AppState, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show => {}
        ProfileCommands::SetName { name } => state.update_name(name).map_err(hint)?,
        ProfileCommands::SetPhoto { path } => {
            let image = ImagePayload::from_file(path)
                .with_context(|| format!("failed to read photo {}", path.display()))?;
            state.set_profile_image(image.to_data_uri()).map_err(hint)?;
        }
        ProfileCommands::RemovePhoto => state.remove_profile_image().map_err(hint)?,
    }
    output(current(state)?, flags.format)
}

fn current(state: &AppState) -> anyhow::Result<&UserProfile> {
    state.profile().ok_or_else(|| hint(StoreError::NoProfile))
}

fn hint(error: StoreError) -> anyhow::Error {
    match error {
        StoreError::NoProfile => {
            anyhow::Error::new(error).context("run `chartxo onboard` to create a profile first")
        }
        other => other.into(),
    }
}
