use crate::geometry::primitives::Rect;
use anyhow::{Result, ensure};
use std::fmt::{Display, Formatter};

/// Axis-aligned bounding box dimensions of a booth element: width (`x`), height (`y`) and depth (`z`).
/// The height plays no part in horizontal placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub size_x: f64,
    pub size_y: f64,
    pub size_z: f64,
}

impl Footprint {
    pub fn try_new(size_x: f64, size_y: f64, size_z: f64) -> Result<Self> {
        ensure!(
            [size_x, size_y, size_z]
                .iter()
                .all(|s| s.is_finite() && *s > 0.0),
            "invalid footprint, all sizes should be positive: ({size_x}, {size_y}, {size_z})"
        );
        Ok(Footprint {
            size_x,
            size_y,
            size_z,
        })
    }

    /// Footprint with known valid dimensions, panics otherwise.
    pub fn new(size_x: f64, size_y: f64, size_z: f64) -> Self {
        Footprint::try_new(size_x, size_y, size_z).expect("footprint dimensions should be positive")
    }

    pub fn half_x(&self) -> f64 {
        self.size_x / 2.0
    }

    pub fn half_z(&self) -> f64 {
        self.size_z / 2.0
    }

    /// The rectangle this footprint covers on the floor when its center is at (`x`, `z`).
    pub fn rect_at(&self, x: f64, z: f64) -> Rect {
        Rect {
            x_min: x - self.size_x / 2.0,
            z_min: z - self.size_z / 2.0,
            x_max: x + self.size_x / 2.0,
            z_max: z + self.size_z / 2.0,
        }
    }
}

impl TryFrom<[f64; 3]> for Footprint {
    type Error = anyhow::Error;

    fn try_from(s: [f64; 3]) -> Result<Self> {
        Footprint::try_new(s[0], s[1], s[2])
    }
}

impl From<Footprint> for [f64; 3] {
    fn from(f: Footprint) -> Self {
        [f.size_x, f.size_y, f.size_z]
    }
}

impl Display for Footprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.size_x, self.size_y, self.size_z)
    }
}
