use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Distance kept between an element's footprint and the walls when computing the placement bounds
pub const WALL_CLEARANCE: f64 = 0.3;
/// Distance kept between an element's footprint and the walls when filtering candidates
pub const BOUNDARY_MARGIN: f64 = 0.1;
/// Extra distance required between two elements, on both axes
pub const COLLISION_BUFFER: f64 = 0.5;
/// Distance between neighbouring candidate positions
pub const GRID_STEP: f64 = 1.0;

///Configuration of the [`PlacementEngine`](crate::placement::PlacementEngine)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlacementConfig {
    ///See [`WALL_CLEARANCE`]
    pub wall_clearance: f64,
    ///See [`BOUNDARY_MARGIN`]
    pub boundary_margin: f64,
    ///See [`COLLISION_BUFFER`]
    pub collision_buffer: f64,
    ///See [`GRID_STEP`]
    pub grid_step: f64,
}

impl PlacementConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_step.is_finite() && self.grid_step > 0.0,
            "grid step should be positive, got {}",
            self.grid_step
        );
        ensure!(
            [
                self.wall_clearance,
                self.boundary_margin,
                self.collision_buffer
            ]
            .iter()
            .all(|m| m.is_finite() && *m >= 0.0),
            "placement margins should be non-negative: {self:?}"
        );
        Ok(())
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            wall_clearance: WALL_CLEARANCE,
            boundary_margin: BOUNDARY_MARGIN,
            collision_buffer: COLLISION_BUFFER,
            grid_step: GRID_STEP,
        }
    }
}
