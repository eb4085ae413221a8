//! Game state and core simulation types
//!
//! The single [`GameState`] value owns the player, the bullet pool and the
//! enemy roster for the lifetime of a run. Nothing outside `sim` mutates them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::menu::MenuButton;
use super::pool::BulletPool;
use super::rect::{Rect, clamp_into_bounds};
use crate::tuning::{EnemyTuning, PlayerTuning, Tuning};

/// Current screen of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    /// Title screen, waiting for confirm
    #[default]
    Start,
    /// Main menu with the New Game button
    Menu,
    /// Active gameplay
    Gameplay,
    /// Player died, waiting for confirm to return to the menu
    GameOver,
}

/// The bounty hunter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Most recent normalized shot direction
    pub aim: Vec2,
    /// Units per second on each axis
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
    pub dollars: u32,
    pub size: Vec2,
    /// Bounding rectangle, re-derived from `pos` every tick
    pub bounds: Rect,
    /// Where the player stands after a reset
    pub spawn: Vec2,
    /// Fractional contact damage not yet applied to `health`
    #[serde(default)]
    pub damage_carry: f32,
}

impl Player {
    /// Create the player at the center of the screen
    pub fn new(tuning: &PlayerTuning, screen: Vec2) -> Self {
        let size = Vec2::new(tuning.width, tuning.height);
        let spawn = clamp_into_bounds(screen * 0.5 - size * 0.5, size, screen);
        Self {
            pos: spawn,
            aim: Vec2::NEG_Y,
            speed: tuning.speed,
            health: tuning.max_health,
            max_health: tuning.max_health,
            dollars: 0,
            size,
            bounds: Rect::from_pos_size(spawn, size),
            spawn,
            damage_carry: 0.0,
        }
    }

    /// Geometric center (bullet origin)
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Re-derive the bounding rectangle from the current position
    pub fn refresh_bounds(&mut self) {
        self.bounds = Rect::from_pos_size(self.pos, self.size);
    }

    /// Move by `delta` and clamp the result into the play area
    pub fn translate_clamped(&mut self, delta: Vec2, screen: Vec2) {
        self.pos = clamp_into_bounds(self.pos + delta, self.size, screen);
        self.refresh_bounds();
    }

    /// Subtract health, never dropping below zero
    pub fn apply_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).clamp(0, self.max_health);
    }

    /// Accumulate fractional damage and apply it in whole units
    pub fn drain(&mut self, amount: f32) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }
        self.damage_carry += amount;
        let whole = self.damage_carry.floor();
        if whole >= 1.0 {
            self.damage_carry -= whole;
            self.apply_damage(whole as i32);
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Credit a kill reward
    pub fn earn(&mut self, bounty: u32) {
        self.dollars = self.dollars.saturating_add(bounty);
    }

    /// Restore full health, empty the wallet and return to the spawn point
    pub fn reset(&mut self) {
        self.health = self.max_health;
        self.dollars = 0;
        self.pos = self.spawn;
        self.aim = Vec2::NEG_Y;
        self.damage_carry = 0.0;
        self.refresh_bounds();
    }
}

/// A pooled projectile slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    /// Center of the bullet circle
    pub pos: Vec2,
    /// Unit travel direction
    pub dir: Vec2,
    pub active: bool,
    pub speed: f32,
    pub radius: f32,
    pub damage: i32,
}

impl Bullet {
    /// An inactive slot with the given stats
    pub fn idle(speed: f32, radius: f32, damage: i32) -> Self {
        Self {
            pos: Vec2::ZERO,
            dir: Vec2::ZERO,
            active: false,
            speed,
            radius,
            damage,
        }
    }

    /// True once the circle lies entirely outside `[0, screen.x] x [0, screen.y]`
    pub fn is_off_screen(&self, screen: Vec2) -> bool {
        self.pos.x + self.radius < 0.0
            || self.pos.x - self.radius > screen.x
            || self.pos.y + self.radius < 0.0
            || self.pos.y - self.radius > screen.y
    }
}

/// A stationary bounty target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    /// Reserved for movement, unused while enemies stand still
    pub dir: Vec2,
    pub active: bool,
    pub speed: f32,
    pub health: i32,
    /// Health restored on reset
    pub max_health: i32,
    /// Dollars credited when killed
    pub bounty: u32,
    pub size: Vec2,
    pub bounds: Rect,
    pub spawn: Vec2,
}

impl Enemy {
    pub fn new(spawn: Vec2, tuning: &EnemyTuning) -> Self {
        let size = Vec2::new(tuning.width, tuning.height);
        Self {
            pos: spawn,
            dir: Vec2::ZERO,
            active: true,
            speed: 0.0,
            health: tuning.health,
            max_health: tuning.health,
            bounty: tuning.bounty,
            size,
            bounds: Rect::from_pos_size(spawn, size),
            spawn,
        }
    }

    /// Subtract damage; returns true when this hit killed the enemy
    pub fn take_hit(&mut self, damage: i32) -> bool {
        if !self.active {
            return false;
        }
        self.health -= damage.max(0);
        if self.health <= 0 {
            self.active = false;
            return true;
        }
        false
    }

    /// Back to spawn with full health
    pub fn reset(&mut self) {
        self.pos = self.spawn;
        self.dir = Vec2::ZERO;
        self.health = self.max_health;
        self.active = true;
        self.bounds = Rect::from_pos_size(self.pos, self.size);
    }
}

/// Spawn points for a horizontally centered row of enemies
pub fn enemy_row(tuning: &EnemyTuning, screen_width: f32) -> Vec<Vec2> {
    let count = tuning.count;
    if count == 0 {
        return Vec::new();
    }
    let row_width = (count - 1) as f32 * tuning.spacing + tuning.width;
    let first_x = (screen_width - row_width) * 0.5;
    (0..count)
        .map(|i| Vec2::new(first_x + i as f32 * tuning.spacing, tuning.row_y))
        .collect()
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance values this run was built from
    pub tuning: Tuning,
    /// Current screen
    pub screen: Screen,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub bullets: BulletPool,
    /// Fixed roster, in spawn order
    pub enemies: Vec<Enemy>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Build a fresh run on the Start screen
    pub fn new(tuning: Tuning) -> Self {
        let screen = Vec2::new(tuning.screen_width, tuning.screen_height);
        let player = Player::new(&tuning.player, screen);
        let bullets = BulletPool::new(&tuning.bullet);
        let enemies = enemy_row(&tuning.enemy, tuning.screen_width)
            .into_iter()
            .map(|spawn| Enemy::new(spawn, &tuning.enemy))
            .collect();

        Self {
            tuning,
            screen: Screen::Start,
            time_ticks: 0,
            player,
            bullets,
            enemies,
        }
    }

    /// Viewport size as a vector
    #[inline]
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.tuning.screen_width, self.tuning.screen_height)
    }

    /// The New Game control on the menu screen
    pub fn new_game_button(&self) -> MenuButton {
        MenuButton::new_game(self.screen_size())
    }

    /// Number of enemies still standing
    pub fn enemies_remaining(&self) -> usize {
        self.enemies.iter().filter(|e| e.active).count()
    }

    /// Restore player, enemies and bullets to their start-of-run values
    pub fn reset(&mut self) {
        self.player.reset();
        for enemy in &mut self.enemies {
            enemy.reset();
        }
        self.bullets.clear();
        log::info!("Run reset: {} enemies respawned", self.enemies.len());
    }
}
