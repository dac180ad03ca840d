use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Position;
use crate::util::FPA;
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle on the booth floor (x, z plane)
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub z_min: f64,
    pub x_max: f64,
    pub z_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, z_min: f64, x_max: f64, z_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && z_min < z_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, z_min: {z_min}, z_max: {z_max}"
        );
        Ok(Rect {
            x_min,
            z_min,
            x_max,
            z_max,
        })
    }

    /// Rectangle centered at (`x`, `z`) with the given width and depth.
    pub fn centered(x: f64, z: f64, width: f64, depth: f64) -> Result<Self> {
        Rect::try_new(
            x - width / 2.0,
            z - depth / 2.0,
            x + width / 2.0,
            z + depth / 2.0,
        )
    }

    /// Returns a new rectangle with the same centroid as `self` but expanded by `dx` in both x-directions and by `dz` in both z-directions.
    /// Negative values shrink the rectangle. If the new rectangle is invalid (x_min >= x_max or z_min >= z_max), returns None.
    pub fn resize_by(mut self, dx: f64, dz: f64) -> Option<Self> {
        self.x_min -= dx;
        self.z_min -= dz;
        self.x_max += dx;
        self.z_max += dz;

        if self.x_min < self.x_max && self.z_min < self.z_max {
            Some(self)
        } else {
            //resizing would lead to invalid rectangle
            None
        }
    }

    /// True if `other` lies entirely within `self`, touching edges included.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x_min >= self.x_min
            && other.x_max <= self.x_max
            && other.z_min >= self.z_min
            && other.z_max <= self.z_max
    }

    /// [Rect::contains_rect] with a tolerance for floating point precision.
    pub fn almost_contains_rect(&self, other: &Rect) -> bool {
        FPA(other.x_min) >= FPA(self.x_min)
            && FPA(other.x_max) <= FPA(self.x_max)
            && FPA(other.z_min) >= FPA(self.z_min)
            && FPA(other.z_max) <= FPA(self.z_max)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn depth(&self) -> f64 {
        self.z_max - self.z_min
    }

    pub fn centroid(&self) -> Position {
        Position::on_floor(
            (self.x_min + self.x_max) / 2.0,
            (self.z_min + self.z_max) / 2.0,
        )
    }
}

impl Shape for Rect {
    fn bbox(&self) -> Rect {
        *self
    }

    fn area(&self) -> f64 {
        self.width() * self.depth()
    }
}

/// Interiors overlap. Rectangles sharing only an edge do not collide.
impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        f64::max(self.x_min, other.x_min) < f64::min(self.x_max, other.x_max)
            && f64::max(self.z_min, other.z_min) < f64::min(self.z_max, other.z_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_rects_do_not_collide() {
        let a = Rect::try_new(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = Rect::try_new(1.0, 0.0, 2.0, 1.0).unwrap();
        assert!(!a.collides_with(&b));
    }

    #[test]
    fn shrinking_past_zero_is_invalid() {
        let r = Rect::centered(0.0, 0.0, 1.0, 4.0).unwrap();
        assert!(r.resize_by(-0.4, -0.4).is_some());
        assert!(r.resize_by(-0.5, 0.0).is_none());
    }

    #[test]
    fn containment_includes_edges() {
        let outer = Rect::centered(0.0, 0.0, 6.0, 6.0).unwrap();
        let inner = Rect::try_new(-3.0, -1.0, 3.0, 1.0).unwrap();
        assert!(outer.contains_rect(&inner));
        assert!(!inner.contains_rect(&outer));
        assert!(Rect::try_new(1.0, 1.0, 0.0, 2.0).is_err());
    }
}
