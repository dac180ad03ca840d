use std::cmp::Ordering;

/// A floor coordinate in meters, compared with a tolerance.
///
/// Room edges and element edges are derived along different arithmetic paths (halving, margins, clamping),
/// so an element flush against a wall can end up a rounding error beyond it.
/// Two `FPA`s within [`FPA::EPSILON`] meters, or [`FPA::ULPS`] units in the last place, are equal.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl FPA {
    /// Absolute tolerance, in meters
    pub const EPSILON: f64 = 1e-9;
    /// Relative tolerance, for coordinates far from the center
    pub const ULPS: i64 = 4;

    fn approx_eq(self, other: FPA) -> bool {
        float_cmp::approx_eq!(
            f64,
            self.0,
            other.0,
            epsilon = Self::EPSILON,
            ulps = Self::ULPS
        )
    }
}

impl From<f64> for FPA {
    fn from(v: f64) -> Self {
        FPA(v)
    }
}

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.approx_eq(*other) {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}
