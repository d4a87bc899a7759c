use std::path::PathBuf;

use clap::Subcommand;

/// Scan history commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List saved scans, newest first.
    List {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one scan with its full analysis.
    Show { id: String },
    /// Delete a scan.
    Delete { id: String },
}

/// Profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show the profile.
    Show,
    /// Change the display name.
    SetName { name: String },
    /// Set the profile photo from an image file.
    SetPhoto { path: PathBuf },
    /// Remove the profile photo.
    RemovePhoto,
}

/// Theme commands. The theme lasts for the current process only.
#[derive(Clone, Debug, Subcommand)]
pub enum ThemeCommands {
    Show,
    Toggle,
}
