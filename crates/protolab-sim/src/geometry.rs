//! Viewport and exclusion-zone geometry.

use serde::{Deserialize, Serialize};

use crate::vec2::Vec2;

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width (non-negative).
    pub width: f64,
    /// Height (non-negative).
    pub height: f64,
}

impl Rect {
    /// Construct a rectangle.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The point on or inside the rectangle closest to `p`.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.x + self.width),
            p.y.clamp(self.y, self.y + self.height),
        )
    }

    /// A circle at `center` with `radius` overlaps this rectangle.
    pub fn intersects_circle(&self, center: Vec2, radius: f64) -> bool {
        center.distance(self.closest_point(center)) < radius
    }
}

/// How an exclusion zone's coordinates are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneAnchor {
    /// Offsets from the viewport center, re-resolved on every resize.
    #[default]
    Center,
    /// Fixed viewport coordinates.
    Absolute,
}

/// A rectangle agents bounce away from, protecting overlay content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExclusionZone {
    /// Coordinate interpretation.
    #[serde(default)]
    pub anchor: ZoneAnchor,
    /// Left edge (or offset from the center x).
    pub x: f64,
    /// Top edge (or offset from the center y).
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl ExclusionZone {
    /// A zone positioned relative to the viewport center.
    pub const fn centered(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { anchor: ZoneAnchor::Center, x, y, width, height }
    }

    /// A zone at fixed viewport coordinates.
    pub const fn absolute(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { anchor: ZoneAnchor::Absolute, x, y, width, height }
    }

    /// Resolve to concrete viewport coordinates.
    pub fn resolve(&self, viewport: Viewport) -> Rect {
        match self.anchor {
            ZoneAnchor::Absolute => Rect::new(self.x, self.y, self.width, self.height),
            ZoneAnchor::Center => {
                let center = viewport.center();
                Rect::new(center.x + self.x, center.y + self.y, self.width, self.height)
            }
        }
    }
}

/// Size of the rendering surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in surface units.
    pub width: f64,
    /// Height in surface units.
    pub height: f64,
}

impl Viewport {
    /// Construct a viewport.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center point.
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether an agent of diameter `icon_size` fits with room to move on both axes.
    pub fn is_usable(self, icon_size: f64) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > icon_size
            && self.height > icon_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_point_clamps_to_edges() {
        let r = Rect::new(10.0, 10.0, 20.0, 10.0);
        assert_eq!(r.closest_point(Vec2::new(0.0, 15.0)), Vec2::new(10.0, 15.0));
        assert_eq!(r.closest_point(Vec2::new(15.0, 15.0)), Vec2::new(15.0, 15.0));
        assert_eq!(r.closest_point(Vec2::new(50.0, 50.0)), Vec2::new(30.0, 20.0));
    }

    #[test]
    fn centered_zone_follows_viewport() {
        let zone = ExclusionZone::centered(-120.0, 60.0, 240.0, 60.0);
        let small = zone.resolve(Viewport::new(800.0, 600.0));
        let large = zone.resolve(Viewport::new(1600.0, 1000.0));
        assert_eq!(small, Rect::new(280.0, 360.0, 240.0, 60.0));
        assert_eq!(large, Rect::new(680.0, 560.0, 240.0, 60.0));
    }

    #[test]
    fn unusable_viewports() {
        assert!(Viewport::new(1440.0, 900.0).is_usable(120.0));
        assert!(!Viewport::new(120.0, 900.0).is_usable(120.0));
        assert!(!Viewport::new(0.0, 0.0).is_usable(120.0));
        assert!(!Viewport::new(f64::NAN, 900.0).is_usable(120.0));
        assert!(!Viewport::new(f64::INFINITY, 900.0).is_usable(120.0));
    }
}
