//! Data-driven game balance
//!
//! Every gameplay constant lives here so a run can be re-tuned from a JSON
//! file without recompiling. Missing fields fall back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors that can occur when loading tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A value is outside the range the simulation can run with
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Player balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Movement speed (units/second, per axis)
    pub speed: f32,
    pub max_health: i32,
    pub width: f32,
    pub height: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            max_health: PLAYER_MAX_HEALTH,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
        }
    }
}

/// Bullet pool balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    /// Number of pooled slots (soft cap on simultaneous shots)
    pub capacity: usize,
    pub speed: f32,
    pub radius: f32,
    pub damage: i32,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            capacity: BULLET_CAPACITY,
            speed: BULLET_SPEED,
            radius: BULLET_RADIUS,
            damage: BULLET_DAMAGE,
        }
    }
}

/// Enemy roster balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub count: usize,
    pub health: i32,
    /// Dollars credited to the player per kill
    pub bounty: u32,
    pub width: f32,
    pub height: f32,
    /// Top edge of the enemy row
    pub row_y: f32,
    /// Horizontal distance between neighbouring enemies' left edges
    pub spacing: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            count: ENEMY_COUNT,
            health: ENEMY_HEALTH,
            bounty: ENEMY_BOUNTY,
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
            row_y: ENEMY_ROW_Y,
            spacing: ENEMY_SPACING,
        }
    }
}

/// HUD layout values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudTuning {
    pub health_bar_width: f32,
}

impl Default for HudTuning {
    fn default() -> Self {
        Self {
            health_bar_width: HEALTH_BAR_WIDTH,
        }
    }
}

/// Complete game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    pub player: PlayerTuning,
    pub bullet: BulletTuning,
    pub enemy: EnemyTuning,
    /// Health drained per second while the player overlaps a live enemy
    pub contact_damage_per_second: f32,
    pub hud: HudTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            player: PlayerTuning::default(),
            bullet: BulletTuning::default(),
            enemy: EnemyTuning::default(),
            contact_damage_per_second: CONTACT_DAMAGE_PER_SECOND,
            hud: HudTuning::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::debug!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }
        // NaN is not positive
        fn is_positive(value: f32) -> bool {
            value.partial_cmp(&0.0) == Some(std::cmp::Ordering::Greater)
        }

        if !is_positive(self.screen_width) {
            return invalid("screen_width", "must be positive");
        }
        if !is_positive(self.screen_height) {
            return invalid("screen_height", "must be positive");
        }
        if self.player.width > self.screen_width || self.player.height > self.screen_height {
            return invalid("player", "must fit inside the screen");
        }
        if self.player.max_health <= 0 {
            return invalid("player.max_health", "must be positive");
        }
        if self.player.speed < 0.0 {
            return invalid("player.speed", "must not be negative");
        }
        if self.bullet.capacity == 0 {
            return invalid("bullet.capacity", "must hold at least one bullet");
        }
        if !is_positive(self.bullet.radius) {
            return invalid("bullet.radius", "must be positive");
        }
        if self.bullet.damage <= 0 {
            return invalid("bullet.damage", "must be positive");
        }
        if self.enemy.count == 0 {
            return invalid("enemy.count", "must spawn at least one enemy");
        }
        if self.enemy.health <= 0 {
            return invalid("enemy.health", "must be positive");
        }
        if self.contact_damage_per_second < 0.0 {
            return invalid("contact_damage_per_second", "must not be negative");
        }
        if self.hud.health_bar_width < 0.0 {
            return invalid("hud.health_bar_width", "must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "bullet": { "damage": 100 } }"#).unwrap();
        assert_eq!(tuning.bullet.damage, 100);
        assert_eq!(tuning.bullet.capacity, BULLET_CAPACITY);
        assert_eq!(tuning.screen_width, SCREEN_WIDTH);
        assert_eq!(tuning.enemy.count, ENEMY_COUNT);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = Tuning::from_json(r#"{ "bullet": { "capacity": 0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "bullet.capacity",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_damage_rejected() {
        let err = Tuning::from_json(r#"{ "bullet": { "damage": -50 } }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "bullet.damage",
                ..
            }
        ));
        assert!(Tuning::from_json(r#"{ "bullet": { "damage": 0 } }"#).is_err());
    }

    #[test]
    fn test_negative_health_bar_rejected() {
        let err = Tuning::from_json(r#"{ "hud": { "health_bar_width": -10.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "hud.health_bar_width",
                ..
            }
        ));
    }

    #[test]
    fn test_nan_screen_rejected() {
        let mut tuning = Tuning::default();
        tuning.screen_width = f32::NAN;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Tuning::from_json("{ screen_width: ").unwrap_err();
        assert!(matches!(err, TuningError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
