//! Bounds → grid candidates → center-preference ranking → collision filter → fallback.

mod bounds;
mod collision;
mod config;
mod engine;
mod grid;
mod ranking;

#[doc(inline)]
pub use bounds::PlacementBounds;
#[doc(inline)]
pub use collision::{CollisionFilter, occupants_collide};
#[doc(inline)]
pub use config::{
    BOUNDARY_MARGIN, COLLISION_BUFFER, GRID_STEP, PlacementConfig, WALL_CLEARANCE,
};
#[doc(inline)]
pub use engine::{Placement, PlacementEngine, PlacementOutcome, smart_position};
#[doc(inline)]
pub use grid::GridCandidates;
#[doc(inline)]
pub use ranking::rank_by_center_distance;
