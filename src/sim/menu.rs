//! Menu screen controls

use glam::Vec2;
use serde::Serialize;

use super::rect::Rect;

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

/// A clickable menu control
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MenuButton {
    pub label: &'static str,
    pub rect: Rect,
}

impl MenuButton {
    /// The New Game button, centered horizontally just below mid-screen
    pub fn new_game(screen: Vec2) -> Self {
        let x = (screen.x - BUTTON_WIDTH) * 0.5;
        let y = screen.y * 0.5;
        Self {
            label: "New Game",
            rect: Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }

    /// Whether the pointer is over the button
    #[inline]
    pub fn is_hovered(&self, pointer: Vec2) -> bool {
        self.rect.contains_point(pointer)
    }
}
