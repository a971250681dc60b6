use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Center-anchored axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAlignedBox {
    pub center: Vec2,
    pub size: Vec2, // width, height; both > 0
}

/// Edge coordinates of a box. Y grows downward, so `top < bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edges {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl AxisAlignedBox {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    pub fn edges(&self) -> Edges {
        Edges {
            left: self.left(),
            right: self.right(),
            top: self.top(),
            bottom: self.bottom(),
        }
    }

    /// Strict overlap of the vertical extents; touching edges do not count
    pub fn overlaps_vertically(&self, other: &AxisAlignedBox) -> bool {
        self.top() < other.bottom() && self.bottom() > other.top()
    }
}

/// Anything that occupies a box on the field
pub trait Bounded {
    fn bounds(&self) -> &AxisAlignedBox;

    fn edges(&self) -> Edges {
        self.bounds().edges()
    }
}

impl Bounded for AxisAlignedBox {
    fn bounds(&self) -> &AxisAlignedBox {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_from_center_and_size() {
        let b = AxisAlignedBox::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 8.0));
        assert_eq!(
            b.edges(),
            Edges {
                left: 8.0,
                right: 12.0,
                top: 16.0,
                bottom: 24.0,
            }
        );
    }

    #[test]
    fn test_overlaps_vertically() {
        let a = AxisAlignedBox::new(Vec2::new(0.0, 10.0), Vec2::new(2.0, 4.0));
        let b = AxisAlignedBox::new(Vec2::new(50.0, 13.0), Vec2::new(2.0, 4.0));
        let touching = AxisAlignedBox::new(Vec2::new(50.0, 14.0), Vec2::new(2.0, 4.0));

        assert!(a.overlaps_vertically(&b));
        assert!(b.overlaps_vertically(&a));
        assert!(!a.overlaps_vertically(&touching), "Shared edge is not overlap");
    }
}
