//! Per-frame simulation tick
//!
//! One call per rendered frame. The current [`Screen`] picks the handler;
//! the handler mutates the owned state and names the next screen.

use glam::Vec2;

use super::collision;
use super::state::{GameState, Screen};

/// Input sampled by the driver for a single tick.
///
/// `confirm` and `pointer_pressed` are edge-triggered (true only on the tick
/// the button went down). The direction flags are level-triggered.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Confirm key went down (Enter)
    pub confirm: bool,
    /// Primary pointer button went down (menu click / shoot)
    pub pointer_pressed: bool,
    /// Pointer position in screen space
    pub pointer: Vec2,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Per-axis movement intent, not normalized (diagonals are faster)
    pub fn movement_axes(&self) -> Vec2 {
        let mut axes = Vec2::ZERO;
        if self.up {
            axes.y -= 1.0;
        }
        if self.down {
            axes.y += 1.0;
        }
        if self.left {
            axes.x -= 1.0;
        }
        if self.right {
            axes.x += 1.0;
        }
        axes
    }
}

/// Advance the game by one frame and return the screen for the next frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Screen {
    // Also maps NaN to zero
    let dt = dt.max(0.0);
    state.time_ticks += 1;

    let next = match state.screen {
        Screen::Start => tick_start(input),
        Screen::Menu => tick_menu(state, input),
        Screen::Gameplay => tick_gameplay(state, input, dt),
        Screen::GameOver => tick_game_over(state, input),
    };

    if next != state.screen {
        log::info!("Screen {:?} -> {:?}", state.screen, next);
        state.screen = next;
    }
    next
}

fn tick_start(input: &TickInput) -> Screen {
    if input.confirm {
        Screen::Menu
    } else {
        Screen::Start
    }
}

fn tick_menu(state: &GameState, input: &TickInput) -> Screen {
    if input.pointer_pressed && state.new_game_button().is_hovered(input.pointer) {
        Screen::Gameplay
    } else {
        Screen::Menu
    }
}

fn tick_gameplay(state: &mut GameState, input: &TickInput, dt: f32) -> Screen {
    let screen = state.screen_size();

    // Movement
    let step = input.movement_axes() * state.player.speed * dt;
    state.player.translate_clamped(step, screen);

    // Shooting
    if input.pointer_pressed {
        let origin = state.player.center();
        if let Some(index) = state.bullets.fire(origin, input.pointer) {
            state.player.aim = state.bullets.slots()[index].dir;
        }
    }

    state.bullets.advance(dt, screen.x, screen.y);
    let report = collision::resolve(&mut state.bullets, &mut state.enemies, &mut state.player);
    if report.hits > 0 {
        log::trace!("{} hits, {} kills, +${}", report.hits, report.kills, report.bounty);
    }

    // Standing on a live enemy hurts
    let touching = state
        .enemies
        .iter()
        .any(|e| e.active && e.bounds.overlaps(&state.player.bounds));
    if touching {
        state.player.drain(state.tuning.contact_damage_per_second * dt);
    }

    if state.player.is_dead() {
        log::info!("Player down with ${}", state.player.dollars);
        Screen::GameOver
    } else {
        Screen::Gameplay
    }
}

fn tick_game_over(state: &mut GameState, input: &TickInput) -> Screen {
    if input.confirm {
        state.reset();
        Screen::Menu
    } else {
        Screen::GameOver
    }
}
