use crate::geometry::primitives::Position;
use crate::placement::PlacementBounds;

/// Lazily enumerates candidate floor positions on a regular grid covering [`PlacementBounds`].
///
/// `x` steps from `-max_x` up to `max_x`, and for every `x`, `z` steps from `-max_z` up to `max_z` (row-major).
/// Coordinates advance by repeated addition of the step, so the last row or column may fall short of the bound.
/// Empty if the bounds are degenerate. Ends once a step no longer advances a coordinate.
#[derive(Clone, Debug)]
pub struct GridCandidates {
    bounds: PlacementBounds,
    step: f64,
    x: f64,
    z: f64,
}

impl GridCandidates {
    pub fn new(bounds: PlacementBounds, step: f64) -> Self {
        assert!(step > 0.0, "grid step should be positive: {step}");
        GridCandidates {
            bounds,
            step,
            x: -bounds.max_x,
            z: -bounds.max_z,
        }
    }
}

impl Iterator for GridCandidates {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        loop {
            // written as a negation so NaN bounds terminate as well
            if !(self.x <= self.bounds.max_x) {
                return None;
            }
            if self.z <= self.bounds.max_z {
                let candidate = Position::on_floor(self.x, self.z);
                let next_z = self.z + self.step;
                //a step lost to rounding ends the row
                self.z = if next_z > self.z { next_z } else { f64::INFINITY };
                return Some(candidate);
            }
            //row exhausted, move on to the next x
            let next_x = self.x + self.step;
            self.x = if next_x > self.x { next_x } else { f64::INFINITY };
            self.z = -self.bounds.max_z;
        }
    }
}
