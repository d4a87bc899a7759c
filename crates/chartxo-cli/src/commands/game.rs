use chartxo_core::game::CandleJump;
use chartxo_core::responses::GameResponse;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GameArgs;
use crate::output::output;

/// Handle `chartxo game`.
pub fn handle(args: &GameArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    output(&play(args.frames, args.jump_every, &mut rng), flags.format)
}

/// Run up to `frames` ticks or until a crash. With `jump_every` the player
/// taps on that cadence; otherwise the autopilot decides.
pub fn play<R: Rng + ?Sized>(frames: u64, jump_every: Option<u64>, rng: &mut R) -> GameResponse {
    let mut game = CandleJump::new();
    while game.frame() < frames {
        let jump = match jump_every {
            Some(every) => every > 0 && game.frame() % every == 0,
            None => game.autopilot_should_jump(),
        };
        if jump {
            game.tap();
        }
        if game.tick(rng) {
            break;
        }
    }
    tracing::debug!(frame = game.frame(), score = game.score(), "game finished");
    GameResponse {
        frames: game.frame(),
        score: game.score(),
        game_over: game.is_over(),
    }
}
