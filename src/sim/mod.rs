//! Gameplay simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - One tick per frame, elapsed time supplied by the caller
//! - Stable iteration order (by slot / roster index)
//! - Every edge case is a silent no-op, never an error

pub mod collision;
pub mod menu;
pub mod pool;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{HitReport, first_enemy_hit, resolve};
pub use menu::MenuButton;
pub use pool::BulletPool;
pub use rect::{Rect, clamp_into_bounds};
pub use state::{Bullet, Enemy, GameState, Player, Screen, enemy_row};
pub use tick::{TickInput, tick};
