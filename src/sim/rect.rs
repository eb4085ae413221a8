//! Axis-aligned rectangle geometry for entity bounds and UI controls
//!
//! Screen space: origin at the top-left, x grows right, y grows down.
//! A rectangle is its top-left corner plus a size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Rectangle anchored at `pos` with the given size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Point-in-rect test (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.pos.x && point.x <= max.x && point.y >= self.pos.y && point.y <= max.y
    }

    /// Overlap test against another rectangle (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.pos.x < b_max.x
            && a_max.x > other.pos.x
            && self.pos.y < b_max.y
            && a_max.y > other.pos.y
    }

    /// Closest point inside the rectangle to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min(), self.max())
    }

    /// Circle-vs-rectangle overlap (touching counts as overlap)
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = self.closest_point(center);
        center.distance_squared(closest) <= radius * radius
    }
}

/// Clamp the top-left corner of a `size`-sized box so the whole box stays
/// inside `[0, 0] - [bounds.x, bounds.y]`.
///
/// When the box is larger than the bounds on an axis it is pinned to 0.
pub fn clamp_into_bounds(pos: Vec2, size: Vec2, bounds: Vec2) -> Vec2 {
    let max = (bounds - size).max(Vec2::ZERO);
    pos.clamp(Vec2::ZERO, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_edges_inclusive() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(rect.contains_point(Vec2::new(30.0, 30.0)));
        assert!(rect.contains_point(Vec2::new(20.0, 15.0)));
        assert!(!rect.contains_point(Vec2::new(9.9, 15.0)));
        assert!(!rect.contains_point(Vec2::new(15.0, 30.1)));
    }

    #[test]
    fn test_circle_overlap_side() {
        let rect = Rect::new(100.0, 100.0, 40.0, 40.0);
        // 4 units left of the left edge, radius 5
        assert!(rect.overlaps_circle(Vec2::new(96.0, 120.0), 5.0));
        assert!(!rect.overlaps_circle(Vec2::new(94.0, 120.0), 5.0));
    }

    #[test]
    fn test_circle_overlap_corner() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Diagonal distance to corner (10,10) is sqrt(18) ~ 4.24
        assert!(rect.overlaps_circle(Vec2::new(13.0, 13.0), 4.5));
        assert!(!rect.overlaps_circle(Vec2::new(13.0, 13.0), 4.0));
    }

    #[test]
    fn test_circle_inside_rect() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(rect.overlaps_circle(Vec2::new(50.0, 50.0), 1.0));
    }

    #[test]
    fn test_rect_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 20.0, 1.0, 1.0)));
    }

    #[test]
    fn test_clamp_into_bounds() {
        let bounds = Vec2::new(800.0, 450.0);
        let size = Vec2::new(40.0, 40.0);
        assert_eq!(
            clamp_into_bounds(Vec2::new(-5.0, 500.0), size, bounds),
            Vec2::new(0.0, 410.0)
        );
        assert_eq!(
            clamp_into_bounds(Vec2::new(900.0, -1.0), size, bounds),
            Vec2::new(760.0, 0.0)
        );
        assert_eq!(
            clamp_into_bounds(Vec2::new(100.0, 100.0), size, bounds),
            Vec2::new(100.0, 100.0)
        );
    }
}
