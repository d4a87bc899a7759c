use chartxo_ai::{analysis_json_schema, response_schema};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `chartxo schema`.
///
/// The default is the full JSON Schema used to validate model output;
/// `--response` prints the reduced schema sent with each analysis request.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = if args.response {
        response_schema()
    } else {
        analysis_json_schema()?
    };
    output(&schema, flags.format)
}
