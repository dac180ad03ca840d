use std::fmt::{Display, Formatter};

/// A coordinate inside a booth, in meters, relative to the center of the floor.
/// `x` runs along the width, `y` is the height above the floor and `z` runs along the depth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub f64, pub f64, pub f64);

impl Position {
    /// The center of the booth floor
    pub const ORIGIN: Position = Position(0.0, 0.0, 0.0);

    /// A position on the floor (`y = 0`)
    pub fn on_floor(x: f64, z: f64) -> Self {
        Position(x, 0.0, z)
    }

    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn z(&self) -> f64 {
        self.2
    }

    /// Horizontal euclidean distance to the center of the floor, height is ignored.
    pub fn center_distance(&self) -> f64 {
        (self.0 * self.0 + self.2 * self.2).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite()
    }
}

impl From<[f64; 3]> for Position {
    fn from(p: [f64; 3]) -> Self {
        Position(p[0], p[1], p[2])
    }
}

impl From<Position> for [f64; 3] {
    fn from(p: Position) -> Self {
        [p.0, p.1, p.2]
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.0, self.1, self.2)
    }
}
