//! Bounty Trails - A top-down bounty hunter shooter
//!
//! Core modules:
//! - `sim`: Frame-synchronous simulation (screens, entities, bullets, collisions)
//! - `hud`: Derived presentation values and the per-frame render snapshot
//! - `tuning`: Data-driven game balance

pub mod hud;
pub mod sim;
pub mod tuning;

pub use hud::{Frame, HealthTier, Hud};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Target frame time (one tick per rendered frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Frame times above this are clamped by the driver
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default viewport dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const PLAYER_SIZE: f32 = 40.0;

    /// Bullet pool defaults
    pub const BULLET_CAPACITY: usize = 50;
    pub const BULLET_SPEED: f32 = 600.0;
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_DAMAGE: i32 = 25;

    /// Enemy roster defaults (one row of stationary targets)
    pub const ENEMY_COUNT: usize = 5;
    pub const ENEMY_HEALTH: i32 = 100;
    pub const ENEMY_BOUNTY: u32 = 10;
    pub const ENEMY_SIZE: f32 = 40.0;
    pub const ENEMY_ROW_Y: f32 = 60.0;
    pub const ENEMY_SPACING: f32 = 150.0;

    /// Health lost per second while touching an enemy
    pub const CONTACT_DAMAGE_PER_SECOND: f32 = 25.0;

    /// HUD health bar background width
    pub const HEALTH_BAR_WIDTH: f32 = 200.0;
}
