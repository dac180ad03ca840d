use crate::entities::Room;
use crate::geometry::primitives::{Footprint, Position};

/// Range in which the center of an element may be placed: `|x| <= max_x` and `|z| <= max_z`.
/// Either limit can be negative when the element is too large for the room.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementBounds {
    pub max_x: f64,
    pub max_z: f64,
}

impl PlacementBounds {
    /// Bounds keeping the whole `footprint` at least `wall_clearance` away from the walls of `room`.
    pub fn calculate(room: &Room, footprint: &Footprint, wall_clearance: f64) -> Self {
        PlacementBounds {
            max_x: room.width / 2.0 - footprint.size_x / 2.0 - wall_clearance,
            max_z: room.depth / 2.0 - footprint.size_z / 2.0 - wall_clearance,
        }
    }

    /// True if no position satisfies the bounds
    pub fn is_degenerate(&self) -> bool {
        self.max_x < 0.0 || self.max_z < 0.0
    }

    /// Clamps a position into the bounds, keeping its height.
    /// On a degenerate (inverted) range this collapses to a single point instead of panicking.
    pub fn clamp(&self, p: Position) -> Position {
        Position(
            f64::max(-self.max_x, f64::min(self.max_x, p.x())),
            p.y(),
            f64::max(-self.max_z, f64::min(self.max_z, p.z())),
        )
    }
}
