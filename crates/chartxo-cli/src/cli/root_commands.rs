use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{HistoryCommands, ProfileCommands, ThemeCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Answer the onboarding survey and create the local profile.
    Onboard(OnboardArgs),
    /// Analyze a chart screenshot and save it to history.
    Analyze(AnalyzeArgs),
    /// Ask follow-up questions about a chart.
    Chat(ChatArgs),
    /// Saved scans.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Local trader profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Colour theme.
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
    /// List purchasable plans and prices.
    Plans,
    /// Print the JSON schema of the analysis result.
    Schema(SchemaArgs),
    /// Run the payment checkout endpoint.
    ServePayments(ServePaymentsArgs),
    /// Play Candle Jump on autopilot.
    Game(GameArgs),
}

#[derive(Clone, Debug, Args)]
pub struct OnboardArgs {
    /// Run the survey again even if a profile exists.
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Chart screenshot (png, jpg, webp, gif or heic).
    pub image: PathBuf,

    /// Request timeout; overrides `gemini.timeout_secs`.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Chart screenshot to discuss.
    #[arg(required_unless_present = "scan", conflicts_with = "scan")]
    pub image: Option<PathBuf>,

    /// Discuss a saved scan instead of a file.
    #[arg(long)]
    pub scan: Option<String>,

    /// Ask a single question and print the transcript instead of starting a prompt.
    #[arg(short, long)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Print the schema sent to the model instead of the full JSON Schema.
    #[arg(long)]
    pub response: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ServePaymentsArgs {
    /// Listen address; overrides `server.bind`.
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct GameArgs {
    /// Stop after this many frames.
    #[arg(long, default_value_t = 1000)]
    pub frames: u64,

    /// Jump on a fixed cadence instead of using the autopilot.
    #[arg(long)]
    pub jump_every: Option<u64>,

    /// Seed for obstacle heights.
    #[arg(long)]
    pub seed: Option<u64>,
}
