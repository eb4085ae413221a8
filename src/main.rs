//! Bounty Trails entry point
//!
//! Headless native driver: feeds one tick per frame from a scripted
//! autopilot and logs what happens. Window, drawing and audio live
//! elsewhere; this binary only exercises the simulation.
//!
//! Usage: `bounty-trails [tuning.json]` (set `RUST_LOG=debug` for detail)

use glam::Vec2;

use bounty_trails::consts::*;
use bounty_trails::sim::{GameState, Screen, TickInput, tick};
use bounty_trails::{Frame, Tuning};

/// Longest demo run, in frames (30 seconds at 60 Hz)
const DEMO_FRAMES: u32 = 30 * 60;
/// Frames between autopilot shots
const FIRE_INTERVAL: u32 = 12;

/// Game instance holding all state
struct Game {
    state: GameState,
    input: TickInput,
    frames: u32,
}

impl Game {
    fn new(tuning: Tuning) -> Self {
        Self {
            state: GameState::new(tuning),
            input: TickInput::default(),
            frames: 0,
        }
    }

    /// Run exactly one simulation tick for a rendered frame
    fn update(&mut self, frame_dt: f32) {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        tick(&mut self.state, &self.input, dt);
        self.frames += 1;

        // Clear one-shot inputs after processing
        self.input.confirm = false;
        self.input.pointer_pressed = false;
    }

    /// Scripted input: start a run, then walk under the nearest enemy and shoot
    fn autopilot(&mut self) {
        let state = &self.state;
        self.input.up = false;
        self.input.down = false;
        self.input.left = false;
        self.input.right = false;

        match state.screen {
            Screen::Start | Screen::GameOver => self.input.confirm = true,
            Screen::Menu => {
                self.input.pointer = state.new_game_button().rect.center();
                self.input.pointer_pressed = true;
            }
            Screen::Gameplay => {
                let center = state.player.center();
                let target = state
                    .enemies
                    .iter()
                    .filter(|e| e.active)
                    .map(|e| e.bounds.center())
                    .min_by(|a, b| {
                        a.distance_squared(center)
                            .partial_cmp(&b.distance_squared(center))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });

                let Some(target) = target else {
                    return;
                };

                let dx = target.x - center.x;
                self.input.left = dx < -4.0;
                self.input.right = dx > 4.0;
                self.input.pointer = target;
                self.input.pointer_pressed = self.frames % FIRE_INTERVAL == 0;
            }
        }
    }
}

fn load_tuning() -> Result<Tuning, bounty_trails::TuningError> {
    match std::env::args().nth(1) {
        Some(path) => Tuning::load(path),
        None => Ok(Tuning::default()),
    }
}

fn main() {
    env_logger::init();
    log::info!("Bounty Trails (headless) starting...");

    let tuning = match load_tuning() {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("Failed to load tuning: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Screen {}x{}, {} enemies, {} bullet slots",
        tuning.screen_width,
        tuning.screen_height,
        tuning.enemy.count,
        tuning.bullet.capacity
    );

    let mut game = Game::new(tuning);
    while game.frames < DEMO_FRAMES {
        game.autopilot();
        game.update(SIM_DT);

        if game.state.screen == Screen::Gameplay && game.state.enemies_remaining() == 0 {
            log::info!("All bounties collected after {} frames", game.frames);
            break;
        }
    }

    let frame = Frame::capture(&game.state, Vec2::ZERO);
    match serde_json::to_string(&frame) {
        Ok(json) => log::debug!("Final frame: {json}"),
        Err(e) => log::warn!("Could not serialize final frame: {e}"),
    }

    println!(
        "Screen: {:?}  Health: {}/{}  Wallet: {}  Enemies left: {}",
        frame.screen,
        frame.player.health,
        frame.player.max_health,
        frame.hud.dollars_text,
        frame.hud.enemies_remaining
    );
}
