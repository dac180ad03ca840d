use crate::geometry::primitives::Rect;
use anyhow::{Result, ensure};

/// Smallest width, depth or height a booth room can be resized to (meters)
pub const MIN_ROOM_DIM: f64 = 1.0;
/// Largest width, depth or height a booth room can be resized to, and largest width or depth it can be created with (meters)
pub const MAX_ROOM_DIM: f64 = 20.0;

/// The rectangular floor of a booth, centered on the origin.
/// Width runs along `x`, depth along `z`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Room {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Room {
    /// Fails unless width and depth lie in (0, [`MAX_ROOM_DIM`]] and height is positive.
    pub fn try_new(width: f64, depth: f64, height: f64) -> Result<Self> {
        ensure!(
            width.is_finite() && width > 0.0 && depth.is_finite() && depth > 0.0,
            "room width and depth should be positive, got {width} x {depth}"
        );
        ensure!(
            width <= MAX_ROOM_DIM && depth <= MAX_ROOM_DIM,
            "room width and depth should not exceed {MAX_ROOM_DIM}, got {width} x {depth}"
        );
        ensure!(
            height.is_finite() && height > 0.0,
            "room height should be positive, got {height}"
        );
        Ok(Room {
            width,
            depth,
            height,
        })
    }

    /// Room with every dimension clamped to [`MIN_ROOM_DIM`, `MAX_ROOM_DIM`].
    pub fn clamped(width: f64, depth: f64, height: f64) -> Self {
        let clamp = |v: f64| f64::max(MIN_ROOM_DIM, f64::min(MAX_ROOM_DIM, v));
        Room {
            width: clamp(width),
            depth: clamp(depth),
            height: clamp(height),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.depth
    }

    /// The full floor of the room: `[-width/2, width/2] x [-depth/2, depth/2]`
    pub fn outline(&self) -> Rect {
        Rect {
            x_min: -self.width / 2.0,
            z_min: -self.depth / 2.0,
            x_max: self.width / 2.0,
            z_max: self.depth / 2.0,
        }
    }

    /// The floor shrunk by `margin` on every side, `None` if nothing remains.
    pub fn interior(&self, margin: f64) -> Option<Rect> {
        self.outline().resize_by(-margin, -margin)
    }
}

impl Default for Room {
    fn default() -> Self {
        Room {
            width: 6.0,
            depth: 6.0,
            height: 3.0,
        }
    }
}
