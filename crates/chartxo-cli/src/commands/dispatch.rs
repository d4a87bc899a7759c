use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
///
/// Commands that touch neither configuration nor local data run first.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match &command {
        Commands::Plans => return commands::plans::handle(flags),
        Commands::Schema(args) => return commands::schema::handle(args, flags),
        Commands::Game(args) => return commands::game::handle(args, flags),
        _ => {}
    }

    let config = bootstrap::load_config()?;

    if let Commands::ServePayments(args) = &command {
        return commands::serve_payments::handle(args, &config, flags).await;
    }

    let mut state = bootstrap::open_state(&config, flags)?;

    match command {
        Commands::Onboard(args) => commands::onboard::handle(&args, &mut state, flags),
        Commands::Analyze(args) => commands::analyze::handle(&args, &config, &mut state, flags).await,
        Commands::Chat(args) => commands::chat::handle(&args, &config, &state, flags).await,
        Commands::History { action } => commands::history::handle(&action, &mut state, flags),
        Commands::Profile { action } => commands::profile::handle(&action, &mut state, flags),
        Commands::Theme { action } => commands::theme::handle(&action, &mut state, flags),
        Commands::Plans | Commands::Schema(_) | Commands::Game(_) | Commands::ServePayments(_) => {
            unreachable!("handled before local state is opened")
        }
    }
}
