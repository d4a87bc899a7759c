use chartxo_core::responses::ThemeResponse;
use chartxo_store::AppState;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThemeCommands;
use crate::output::output;

/// Handle `chartxo theme`.
pub fn handle(action: &ThemeCommands, state: &mut AppState, flags: &GlobalFlags) -> anyhow::Result<()> {
    let theme = match action {
        ThemeCommands::Show => state.theme(),
        ThemeCommands::Toggle => state.toggle_theme(),
    };
    output(&ThemeResponse { theme }, flags.format)
}
