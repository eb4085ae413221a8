//! Bullet-vs-enemy collision resolution
//!
//! Bullets are circles, enemies are axis-aligned rectangles. Each bullet
//! strikes at most one enemy per tick: the first live enemy in roster order
//! whose bounds its circle overlaps.

use serde::{Deserialize, Serialize};

use super::pool::BulletPool;
use super::state::{Enemy, Player};

/// Summary of one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitReport {
    /// Bullets that struck an enemy
    pub hits: u32,
    /// Enemies killed this pass
    pub kills: u32,
    /// Dollars credited this pass
    pub bounty: u32,
}

/// Index of the first live enemy overlapped by a circle, if any
pub fn first_enemy_hit(enemies: &[Enemy], center: glam::Vec2, radius: f32) -> Option<usize> {
    enemies
        .iter()
        .position(|e| e.active && e.bounds.overlaps_circle(center, radius))
}

/// Test every active bullet against every active enemy, in index order.
///
/// A hit retires the bullet and subtracts its damage from the enemy. An
/// enemy whose health drops to zero or below is deactivated and its bounty
/// is credited to the player, exactly once.
pub fn resolve(bullets: &mut BulletPool, enemies: &mut [Enemy], player: &mut Player) -> HitReport {
    let mut report = HitReport::default();

    for bullet in bullets.slots_mut().iter_mut().filter(|b| b.active) {
        let Some(index) = first_enemy_hit(enemies, bullet.pos, bullet.radius) else {
            continue;
        };

        bullet.active = false;
        report.hits += 1;

        let enemy = &mut enemies[index];
        if enemy.take_hit(bullet.damage) {
            player.earn(enemy.bounty);
            report.kills += 1;
            report.bounty = report.bounty.saturating_add(enemy.bounty);
            log::debug!("Enemy {index} down, +${} (wallet ${})", enemy.bounty, player.dollars);
        }
    }

    report
}
