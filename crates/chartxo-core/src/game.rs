//! Candle Jump: the side-scroller shown while an analysis is running.
//!
//! A green candle jumps over red candles scrolling in from the right. The
//! simulation is frame based and renderer agnostic; randomness comes from the
//! caller so runs can be replayed.

use rand::Rng;
use serde::Serialize;

pub const FIELD_WIDTH: f64 = 280.0;
pub const FIELD_HEIGHT: f64 = 150.0;
/// Distance of the ground line from the bottom edge.
pub const GROUND_OFFSET: f64 = 10.0;
pub const GRAVITY: f64 = 0.6;
pub const JUMP_STRENGTH: f64 = -10.0;
pub const GAME_SPEED: f64 = 5.0;
pub const OBSTACLE_SPAWN_RATE: u64 = 100;
pub const SCORE_EVERY: u64 = 10;

const PLAYER_X: f64 = 50.0;
const PLAYER_START_Y: f64 = 150.0;
const PLAYER_SIZE: f64 = 20.0;
const OBSTACLE_WIDTH: f64 = 15.0;
const OBSTACLE_MIN_HEIGHT: f64 = 30.0;
const OBSTACLE_HEIGHT_SPREAD: f64 = 20.0;
/// Horizontal gap at which the autopilot jumps.
const AUTOPILOT_GAP: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Player {
    pub body: Rect,
    pub dy: f64,
    pub grounded: bool,
}

impl Player {
    const fn spawn() -> Self {
        Self {
            body: Rect {
                x: PLAYER_X,
                y: PLAYER_START_Y,
                width: PLAYER_SIZE,
                height: PLAYER_SIZE,
            },
            dy: 0.0,
            grounded: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleJump {
    player: Player,
    obstacles: Vec<Rect>,
    frame: u64,
    score: u64,
    game_over: bool,
}

impl Default for CandleJump {
    fn default() -> Self {
        Self::new()
    }
}

impl CandleJump {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player: Player::spawn(),
            obstacles: Vec::new(),
            frame: 0,
            score: 0,
            game_over: false,
        }
    }

    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.game_over
    }

    /// Tap input: jump when grounded, restart after a game over.
    pub fn tap(&mut self) {
        if self.game_over {
            *self = Self::new();
            return;
        }
        if self.player.grounded {
            self.player.dy = JUMP_STRENGTH;
            self.player.grounded = false;
        }
    }

    /// Advance one frame. Returns `true` once the game is over.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.game_over {
            return true;
        }

        let ground = FIELD_HEIGHT - GROUND_OFFSET;
        let player = &mut self.player;
        player.dy += GRAVITY;
        player.body.y += player.dy;
        if player.body.y + player.body.height >= ground {
            player.body.y = ground - player.body.height;
            player.dy = 0.0;
            player.grounded = true;
        }

        if self.frame % OBSTACLE_SPAWN_RATE == 0 {
            let height = OBSTACLE_MIN_HEIGHT + rng.r#gen::<f64>() * OBSTACLE_HEIGHT_SPREAD;
            self.obstacles.push(Rect {
                x: FIELD_WIDTH,
                y: ground - height,
                width: OBSTACLE_WIDTH,
                height,
            });
        }

        for obstacle in &mut self.obstacles {
            obstacle.x -= GAME_SPEED;
            if self.player.body.intersects(obstacle) {
                self.game_over = true;
                return true;
            }
        }
        self.obstacles.retain(|o| o.x + o.width > 0.0);

        if self.frame % SCORE_EVERY == 0 {
            self.score += 1;
        }
        self.frame += 1;
        false
    }

    /// Whether a simple autopilot would jump now: grounded with the nearest
    /// incoming obstacle within reach.
    #[must_use]
    pub fn autopilot_should_jump(&self) -> bool {
        let front = self.player.body.x + self.player.body.width;
        self.player.grounded
            && self
                .obstacles
                .iter()
                .any(|o| o.x >= front && o.x - front <= AUTOPILOT_GAP)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn run_until(game: &mut CandleJump, rng: &mut StdRng, frame: u64) {
        while game.frame() < frame && !game.tick(rng) {}
    }

    #[test]
    fn player_settles_on_ground() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = CandleJump::new();
        game.tick(&mut rng);
        let ground = FIELD_HEIGHT - GROUND_OFFSET;
        assert!((game.player().body.y - (ground - PLAYER_SIZE)).abs() < f64::EPSILON);
        assert!(game.player().grounded);
        assert_eq!(game.obstacles().len(), 1);
    }

    #[test]
    fn idle_player_hits_first_obstacle() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = CandleJump::new();
        let mut ticks = 0;
        while !game.tick(&mut rng) {
            ticks += 1;
            assert!(ticks < 1000, "game should end");
        }
        assert_eq!(ticks, 42);
        assert_eq!(game.score(), 5);
        assert!(game.is_over());
    }

    #[test]
    fn timed_jump_clears_first_obstacle() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = CandleJump::new();
        run_until(&mut game, &mut rng, 36);
        game.tap();
        assert!(!game.player().grounded);
        run_until(&mut game, &mut rng, 100);
        assert!(!game.is_over());
        assert_eq!(game.frame(), 100);
    }

    #[test]
    fn tap_in_air_does_not_double_jump() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = CandleJump::new();
        game.tick(&mut rng);
        game.tap();
        game.tick(&mut rng);
        let dy = game.player().dy;
        game.tap();
        assert!((game.player().dy - dy).abs() < f64::EPSILON);
    }

    #[test]
    fn tap_after_game_over_restarts() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = CandleJump::new();
        while !game.tick(&mut rng) {}
        game.tap();
        assert_eq!(game, CandleJump::new());
    }

    #[test]
    fn autopilot_survives() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = CandleJump::new();
        for _ in 0..1000 {
            if game.autopilot_should_jump() {
                game.tap();
            }
            assert!(!game.tick(&mut rng), "crashed at frame {}", game.frame());
        }
        assert_eq!(game.score(), 100);
    }

    #[test]
    fn offscreen_obstacles_are_dropped() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = CandleJump::new();
        for _ in 0..250 {
            if game.autopilot_should_jump() {
                game.tap();
            }
            game.tick(&mut rng);
        }
        assert!(game.obstacles().iter().all(|o| o.x + o.width > 0.0));
        assert!(game.obstacles().len() <= 3);
    }
}
