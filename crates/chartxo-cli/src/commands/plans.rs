use chartxo_payments::catalogue;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `chartxo plans`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&catalogue(), flags.format)
}
