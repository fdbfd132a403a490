//! Axis-aligned rectangle geometry
//!
//! Walls, entity bounds, and collision probes are all `Aabb`s. Overlap is
//! strict: rectangles that merely touch along an edge do not overlap.

use glam::Vec2;

/// An axis-aligned bounding box; `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a box from its center point and half extents
    pub fn from_center(center: Vec2, half_w: f32, half_h: f32) -> Self {
        Self::new(
            center.x - half_w,
            center.y - half_h,
            half_w * 2.0,
            half_h * 2.0,
        )
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test: false when the boxes are fully separated on
    /// either axis, and false when they share only an edge
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// Move the box so its right edge sits at `right`
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    /// Move the box so its left edge sits at `left`
    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    /// Move the box so its bottom edge sits at `bottom`
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    /// Move the box so its top edge sits at `top`
    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_shared_interior() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_disjoint() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(20.0, 20.0, 5.0, 5.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_contained() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(2.0, 2.0, 3.0, 3.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        // Touching along the vertical edge (a.right == b.left)
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        // Touching along the horizontal edge (a.bottom == c.top)
        let c = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
        // Nudging past the edge makes it an overlap
        let d = Aabb::new(9.9, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&d));
    }

    #[test]
    fn test_from_center() {
        let r = Aabb::from_center(Vec2::new(50.0, 50.0), 20.0, 20.0);
        assert_eq!(r, Aabb::new(30.0, 30.0, 40.0, 40.0));
        assert_eq!(r.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_edge_setters() {
        let mut r = Aabb::new(0.0, 0.0, 40.0, 40.0);
        r.set_right(100.0);
        assert_eq!(r.x, 60.0);
        r.set_left(164.0);
        assert_eq!(r.x, 164.0);
        r.set_bottom(100.0);
        assert_eq!(r.y, 60.0);
        r.set_top(164.0);
        assert_eq!(r.y, 164.0);
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Aabb::new(ax, ay, aw, ah);
            let b = Aabb::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
