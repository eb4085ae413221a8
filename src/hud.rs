//! HUD values and the per-frame render snapshot
//!
//! Everything here is recomputed from [`GameState`] each frame and owns no
//! state between frames. The renderer reads it and never writes back.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Bullet, Enemy, GameState, MenuButton, Player, Screen};

/// RGBA color, 8 bits per channel
pub type Color = [u8; 4];

pub const COLOR_HEALTHY: Color = [0, 228, 48, 255];
pub const COLOR_WARNING: Color = [255, 161, 0, 255];
pub const COLOR_CRITICAL: Color = [230, 41, 55, 255];
pub const COLOR_BUTTON: Color = [200, 200, 200, 255];
pub const COLOR_BUTTON_HOVER: Color = [102, 191, 255, 255];

/// Health bar color bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthTier {
    /// Above 50%
    Healthy,
    /// 30% to 50% inclusive
    Warning,
    /// Below 30%
    Critical,
}

impl HealthTier {
    pub fn from_fraction(fraction: f32) -> Self {
        if fraction > 0.5 {
            HealthTier::Healthy
        } else if fraction >= 0.3 {
            HealthTier::Warning
        } else {
            HealthTier::Critical
        }
    }

    pub fn color(&self) -> Color {
        match self {
            HealthTier::Healthy => COLOR_HEALTHY,
            HealthTier::Warning => COLOR_WARNING,
            HealthTier::Critical => COLOR_CRITICAL,
        }
    }
}

/// Gameplay overlay values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    /// Health as a fraction of max, in [0, 1]
    pub health_fraction: f32,
    /// Width of the unfilled bar
    pub health_bar_background: f32,
    /// Width of the filled part of the bar
    pub health_bar_fill: f32,
    pub health_tier: HealthTier,
    pub health_color: Color,
    /// Wallet text, e.g. `$120`
    pub dollars_text: String,
    pub enemies_remaining: usize,
}

impl Hud {
    pub fn compute(state: &GameState) -> Self {
        let health_bar_background = state.tuning.hud.health_bar_width;
        let health_fraction = health_fraction(&state.player);
        let health_tier = HealthTier::from_fraction(health_fraction);
        Self {
            health_fraction,
            health_bar_background,
            health_bar_fill: health_bar_background * health_fraction,
            health_tier,
            health_color: health_tier.color(),
            dollars_text: format_dollars(state.player.dollars),
            enemies_remaining: state.enemies_remaining(),
        }
    }
}

/// Player health over max health, clamped to [0, 1]
pub fn health_fraction(player: &Player) -> f32 {
    if player.max_health <= 0 {
        return 0.0;
    }
    (player.health as f32 / player.max_health as f32).clamp(0.0, 1.0)
}

pub fn format_dollars(dollars: u32) -> String {
    format!("${dollars}")
}

/// Menu button as drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ButtonView {
    pub button: MenuButton,
    pub hovered: bool,
    pub color: Color,
}

impl ButtonView {
    pub fn new(button: MenuButton, pointer: Vec2) -> Self {
        let hovered = button.is_hovered(pointer);
        Self {
            button,
            hovered,
            color: if hovered { COLOR_BUTTON_HOVER } else { COLOR_BUTTON },
        }
    }
}

/// Read-only snapshot handed to the renderer
#[derive(Debug, Clone, Serialize)]
pub struct Frame<'a> {
    pub screen: Screen,
    pub player: &'a Player,
    /// Active bullets only
    pub bullets: Vec<&'a Bullet>,
    /// Live enemies only
    pub enemies: Vec<&'a Enemy>,
    pub hud: Hud,
    /// Present on the menu screen
    pub new_game: Option<ButtonView>,
}

impl<'a> Frame<'a> {
    /// Snapshot the state after this frame's tick
    pub fn capture(state: &'a GameState, pointer: Vec2) -> Self {
        let new_game = (state.screen == Screen::Menu)
            .then(|| ButtonView::new(state.new_game_button(), pointer));
        Self {
            screen: state.screen,
            player: &state.player,
            bullets: state.bullets.iter_active().collect(),
            enemies: state.enemies.iter().filter(|e| e.active).collect(),
            hud: Hud::compute(state),
            new_game,
        }
    }
}
