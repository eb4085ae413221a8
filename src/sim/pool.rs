//! Fixed-capacity bullet pool
//!
//! Slots are allocated once and never grow or shrink. Firing claims the
//! lowest-index inactive slot; when every slot is in flight the shot is
//! dropped. That drop is the game's fire-rate cap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Bullet;
use crate::tuning::BulletTuning;

/// Pool of reusable bullet slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletPool {
    slots: Box<[Bullet]>,
}

impl BulletPool {
    /// Allocate `tuning.capacity` inactive slots
    pub fn new(tuning: &BulletTuning) -> Self {
        let slots = (0..tuning.capacity)
            .map(|_| Bullet::idle(tuning.speed, tuning.radius, tuning.damage))
            .collect();
        Self { slots }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// All slots, active or not, in index order
    #[inline]
    pub fn slots(&self) -> &[Bullet] {
        &self.slots
    }

    #[inline]
    pub fn slots_mut(&mut self) -> &mut [Bullet] {
        &mut self.slots
    }

    /// Bullets currently in flight, in index order
    pub fn iter_active(&self) -> impl Iterator<Item = &Bullet> {
        self.slots.iter().filter(|b| b.active)
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    /// Launch a bullet from `origin` toward `target`.
    ///
    /// Returns the claimed slot index, or `None` if the pool is exhausted or
    /// `target == origin` (no direction to fly in). Neither case is an error.
    pub fn fire(&mut self, origin: Vec2, target: Vec2) -> Option<usize> {
        let Some(dir) = (target - origin).try_normalize() else {
            log::trace!("Shot skipped: zero-length aim at {origin}");
            return None;
        };

        let Some(index) = self.slots.iter().position(|b| !b.active) else {
            log::trace!("Shot dropped: all {} bullets in flight", self.slots.len());
            return None;
        };

        let bullet = &mut self.slots[index];
        bullet.active = true;
        bullet.pos = origin;
        bullet.dir = dir;
        Some(index)
    }

    /// Move every active bullet and retire the ones that left the screen
    pub fn advance(&mut self, dt: f32, screen_width: f32, screen_height: f32) {
        let screen = Vec2::new(screen_width, screen_height);
        for bullet in self.slots.iter_mut().filter(|b| b.active) {
            bullet.pos += bullet.dir * bullet.speed * dt;
            if bullet.is_off_screen(screen) {
                bullet.active = false;
            }
        }
    }

    /// Deactivate every slot
    pub fn clear(&mut self) {
        for bullet in self.slots.iter_mut() {
            bullet.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool(capacity: usize) -> BulletPool {
        BulletPool::new(&BulletTuning {
            capacity,
            ..Default::default()
        })
    }

    #[test]
    fn test_fire_claims_lowest_free_slot() {
        let mut pool = pool(4);
        let origin = Vec2::new(100.0, 100.0);
        let target = Vec2::new(200.0, 100.0);

        assert_eq!(pool.fire(origin, target), Some(0));
        assert_eq!(pool.fire(origin, target), Some(1));
        assert_eq!(pool.fire(origin, target), Some(2));

        pool.slots_mut()[1].active = false;
        assert_eq!(pool.fire(origin, target), Some(1));
        assert_eq!(pool.fire(origin, target), Some(3));
    }

    #[test]
    fn test_fire_sets_position_and_unit_direction() {
        let mut pool = pool(2);
        let index = pool.fire(Vec2::new(10.0, 10.0), Vec2::new(13.0, 14.0)).unwrap();
        let bullet = &pool.slots()[index];
        assert!(bullet.active);
        assert_eq!(bullet.pos, Vec2::new(10.0, 10.0));
        assert!((bullet.dir - Vec2::new(0.6, 0.8)).length() < 1e-5);
    }

    #[test]
    fn test_exhausted_pool_drops_shot() {
        let mut pool = pool(50);
        let origin = Vec2::new(400.0, 225.0);
        let target = Vec2::new(400.0, 0.0);
        for _ in 0..50 {
            assert!(pool.fire(origin, target).is_some());
        }
        assert_eq!(pool.fire(origin, target), None);
        assert_eq!(pool.active_count(), 50);
        assert_eq!(pool.capacity(), 50);
    }

    #[test]
    fn test_zero_length_aim_is_skipped() {
        let mut pool = pool(3);
        let point = Vec2::new(50.0, 50.0);
        assert_eq!(pool.fire(point, point), None);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_advance_moves_along_direction() {
        let mut pool = pool(1);
        pool.fire(Vec2::new(100.0, 100.0), Vec2::new(100.0, 0.0));
        pool.advance(0.1, 800.0, 450.0);
        let bullet = &pool.slots()[0];
        assert!(bullet.active);
        // speed 600 * 0.1s upward
        assert!((bullet.pos - Vec2::new(100.0, 40.0)).length() < 1e-3);
    }

    #[test]
    fn test_advance_retires_bullet_past_each_edge() {
        let targets = [
            Vec2::new(-100.0, 225.0),
            Vec2::new(900.0, 225.0),
            Vec2::new(400.0, -100.0),
            Vec2::new(400.0, 600.0),
        ];
        for target in targets {
            let mut pool = pool(1);
            pool.fire(Vec2::new(400.0, 225.0), target);
            // 600 units in one step clears any edge of an 800x450 screen
            pool.advance(1.0, 800.0, 450.0);
            assert_eq!(pool.active_count(), 0, "bullet toward {target} survived");
        }
    }

    #[test]
    fn test_advance_keeps_bullet_touching_edge() {
        let mut pool = pool(1);
        pool.fire(Vec2::new(10.0, 100.0), Vec2::new(0.0, 100.0));
        // Center lands at x = -4, circle still overlaps the screen
        pool.advance(14.0 / 600.0, 800.0, 450.0);
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut pool = pool(2);
        pool.fire(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        let before = pool.slots().to_vec();
        pool.advance(0.0, 800.0, 450.0);
        assert_eq!(pool.slots(), &before[..]);
    }

    #[test]
    fn test_clear_deactivates_all() {
        let mut pool = pool(3);
        for _ in 0..3 {
            pool.fire(Vec2::ZERO, Vec2::ONE);
        }
        pool.clear();
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.fire(Vec2::ZERO, Vec2::ONE), Some(0));
    }

    proptest! {
        #[test]
        fn prop_active_never_exceeds_capacity(
            capacity in 1usize..64,
            shots in 0usize..200,
        ) {
            let mut pool = pool(capacity);
            let mut fired = 0;
            for _ in 0..shots {
                if pool.fire(Vec2::new(400.0, 225.0), Vec2::new(400.0, 0.0)).is_some() {
                    fired += 1;
                }
            }
            prop_assert_eq!(fired, shots.min(capacity));
            prop_assert_eq!(pool.active_count(), shots.min(capacity));
        }

        #[test]
        fn prop_directions_are_unit_length(
            tx in -1000.0f32..1000.0,
            ty in -1000.0f32..1000.0,
        ) {
            let mut pool = pool(1);
            let origin = Vec2::new(400.0, 225.0);
            if let Some(index) = pool.fire(origin, Vec2::new(tx, ty)) {
                let len = pool.slots()[index].dir.length();
                prop_assert!((len - 1.0).abs() < 1e-4);
            }
        }
    }
}
