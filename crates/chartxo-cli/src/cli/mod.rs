use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `chartxo` binary.
#[derive(Debug, Parser)]
#[command(name = "chartxo", version, about = "Chartxo - AI chart pattern analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the profile and scan history
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::root_commands::GameArgs;
    use super::subcommands::HistoryCommands;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["chartxo", "--format", "table", "--verbose", "plans"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Plans));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["chartxo", "history", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::History {
                action: HistoryCommands::List { limit: None }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["chartxo", "--format", "xml", "plans"]).is_err());
    }

    #[test]
    fn data_dir_is_copied_into_flags() {
        let cli = Cli::try_parse_from(["chartxo", "--data-dir", "/tmp/chartxo", "plans"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some(Path::new("/tmp/chartxo")));
    }

    #[test]
    fn analyze_takes_image_and_timeout() {
        let cli = Cli::try_parse_from(["chartxo", "analyze", "chart.png", "--timeout-secs", "5"])
            .expect("cli should parse");
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.image, Path::new("chart.png"));
        assert_eq!(args.timeout_secs, Some(5));
    }

    #[test]
    fn chat_needs_exactly_one_source() {
        assert!(Cli::try_parse_from(["chartxo", "chat"]).is_err());
        assert!(Cli::try_parse_from(["chartxo", "chat", "a.png", "--scan", "scan-1"]).is_err());
        assert!(Cli::try_parse_from(["chartxo", "chat", "--scan", "scan-1"]).is_ok());
    }

    #[test]
    fn game_defaults() {
        let cli = Cli::try_parse_from(["chartxo", "game"]).expect("cli should parse");
        let Commands::Game(GameArgs {
            frames,
            jump_every,
            seed,
        }) = cli.command
        else {
            panic!("expected game");
        };
        assert_eq!(frames, 1000);
        assert_eq!(jump_every, None);
        assert_eq!(seed, None);
    }
}
