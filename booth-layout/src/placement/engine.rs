use crate::entities::{Occupant, Room};
use crate::geometry::primitives::{Footprint, Position};
use crate::placement::{
    CollisionFilter, GridCandidates, PlacementBounds, PlacementConfig, rank_by_center_distance,
};
use log::{debug, trace, warn};
use std::fmt::{Display, Formatter};

/// How a [`Placement`] was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// A grid candidate passed every check. `rank` is its index in the center-preference order.
    Grid { rank: usize, n_candidates: usize },
    /// No candidate passed, the element was put at the (clamped) center of the room.
    /// It may overlap other elements.
    Fallback { n_candidates: usize },
}

/// Result of a placement: a position on the floor and how it was found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Position,
    pub outcome: PlacementOutcome,
}

impl Placement {
    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, PlacementOutcome::Fallback { .. })
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            PlacementOutcome::Grid { rank, n_candidates } => {
                write!(f, "{} [candidate {rank}/{n_candidates}]", self.position)
            }
            PlacementOutcome::Fallback { n_candidates } => {
                write!(f, "{} [fallback, {n_candidates} candidates]", self.position)
            }
        }
    }
}

/// Picks a floor position for a new element, given the room and the elements already in it.
///
/// Stateless: every call derives the bounds, generates grid candidates, ranks them by distance to the center,
/// and returns the first candidate that stays inside the room without crowding an existing element.
/// If none qualifies the element goes to the clamped center of the room, even if that means overlapping.
/// It never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlacementEngine {
    config: PlacementConfig,
}

impl PlacementEngine {
    pub fn new(config: PlacementConfig) -> Self {
        assert!(
            config.validate().is_ok(),
            "invalid placement config: {config:?}"
        );
        PlacementEngine { config }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    pub fn place<O: Occupant>(
        &self,
        footprint: &Footprint,
        existing: &[O],
        room: &Room,
    ) -> Placement {
        let bounds = PlacementBounds::calculate(room, footprint, self.config.wall_clearance);
        if bounds.is_degenerate() {
            debug!(
                "[PLC] {footprint} does not fit within the clearance of a {}x{} room: {bounds:?}",
                room.width, room.depth
            );
        }

        let ranked =
            rank_by_center_distance(GridCandidates::new(bounds, self.config.grid_step));
        let n_candidates = ranked.len();

        let filter = CollisionFilter::new(
            *footprint,
            existing,
            room,
            self.config.boundary_margin,
            self.config.collision_buffer,
        );

        for (rank, candidate) in ranked.into_iter().enumerate() {
            if !filter.within_boundary(candidate) {
                trace!("[PLC] {candidate} crosses the room boundary");
                continue;
            }
            if let Some(i) = filter.first_collision(candidate) {
                trace!("[PLC] {candidate} collides with occupant {i}");
                continue;
            }
            let placement = Placement {
                position: bounds.clamp(candidate),
                outcome: PlacementOutcome::Grid { rank, n_candidates },
            };
            debug!("[PLC] placed {footprint} at {placement}");
            return placement;
        }

        let placement = Placement {
            position: bounds.clamp(Position::ORIGIN),
            outcome: PlacementOutcome::Fallback { n_candidates },
        };
        warn!(
            "[PLC] no free position for {footprint} among {} occupants, falling back to {}",
            existing.len(),
            placement.position
        );
        placement
    }
}

/// Places `footprint` with the default [`PlacementConfig`] and returns only the position.
pub fn smart_position<O: Occupant>(footprint: &Footprint, existing: &[O], room: &Room) -> Position {
    PlacementEngine::default()
        .place(footprint, existing, room)
        .position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PlacedElement;
    use crate::placement::occupants_collide;
    use crate::util::assertions;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn room(width: f64, depth: f64) -> Room {
        Room::try_new(width, depth, 3.0).unwrap()
    }

    fn placed(position: Position, footprint: Footprint) -> PlacedElement {
        PlacedElement {
            position,
            footprint,
        }
    }

    #[test_case(3.0, 3.0, [1.0, 1.0, 1.0]; "small room")]
    #[test_case(6.0, 6.0, [0.8, 1.6, 0.5]; "kiosk")]
    #[test_case(4.6, 2.0, [4.0, 2.5, 0.2]; "tight video wall")]
    #[test_case(9.3, 5.7, [2.5, 1.1, 1.0]; "uneven room")]
    #[test_case(20.0, 1.0, [0.3, 1.0, 0.4]; "corridor")]
    fn result_stays_inside_the_room(width: f64, depth: f64, size: [f64; 3]) {
        init_logger();
        let room = room(width, depth);
        let fp = Footprint::try_from(size).unwrap();
        let existing: [PlacedElement; 0] = [];
        let p = PlacementEngine::default().place(&fp, &existing, &room);
        assert_eq!(p.position.y(), 0.0);
        assert!(assertions::footprint_within_room(p.position, &fp, &room, 0.0));
    }

    #[test]
    fn empty_room_respects_wall_clearance() {
        let room = room(7.5, 4.2);
        let fp = Footprint::new(1.2, 1.8, 0.8);
        let existing: [PlacedElement; 0] = [];
        let p = PlacementEngine::default().place(&fp, &existing, &room);
        assert!(!p.is_fallback());
        assert!(assertions::footprint_within_room(p.position, &fp, &room, 0.3));
    }

    #[test]
    fn avoids_an_element_in_the_center() {
        init_logger();
        let room = room(6.0, 6.0);
        let occupant = placed(Position::ORIGIN, Footprint::new(2.0, 1.0, 2.0));
        let fp = Footprint::new(1.0, 1.0, 1.0);
        let p = PlacementEngine::default().place(&fp, &[occupant], &room);

        assert!(!p.is_fallback());
        assert!(!occupants_collide(
            p.position,
            &fp,
            occupant.position,
            &occupant.footprint,
            0.5
        ));
        assert!(assertions::footprint_within_room(p.position, &fp, &room, 0.1));
        // max = 3 - 0.5 - 0.3 = 2.2, grid: -2.2, -1.2, -0.2, 0.8, 1.8.
        // (-2.2, -0.2) is the first of the closest candidates clearing the buffer of 2.0
        assert!((p.position.x() - -2.2).abs() < 1e-9);
        assert!((p.position.z() - -0.2).abs() < 1e-9);
    }

    #[test]
    fn prefers_the_center_of_a_large_room() {
        let room = room(20.0, 20.0);
        let fp = Footprint::new(0.6, 1.0, 0.6);
        let existing: [PlacedElement; 0] = [];
        let p = PlacementEngine::default().place(&fp, &existing, &room);
        // max = 10 - 0.3 - 0.3 = 9.4, the grid point closest to the center is (-0.4, -0.4)
        assert_eq!(p.outcome, PlacementOutcome::Grid { rank: 0, n_candidates: 19 * 19 });
        assert!((p.position.x() - -0.4).abs() < 1e-9);
        assert!((p.position.z() - -0.4).abs() < 1e-9);
    }

    #[test]
    fn exact_center_when_the_grid_hits_it() {
        let fp = Footprint::new(1.0, 1.0, 1.0);
        let existing: [PlacedElement; 0] = [];

        // max = 5.3 - 0.5 - 0.3 = 4.5, the grid runs through -0.5 and 0.5 but not through 0
        let off_grid = room(10.6, 10.6);
        let p = PlacementEngine::default().place(&fp, &existing, &off_grid);
        assert!((p.position.x() - -0.5).abs() < 1e-9);
        assert!((p.position.z() - -0.5).abs() < 1e-9);

        // max = 5.0, the grid runs through 0
        let on_grid = room(11.6, 11.6);
        let p = PlacementEngine::default().place(&fp, &existing, &on_grid);
        assert!(p.position.x().abs() < 1e-9);
        assert!(p.position.z().abs() < 1e-9);
    }

    #[test]
    fn saturated_room_falls_back_to_the_center() {
        init_logger();
        let room = room(3.0, 3.0);
        let engine = PlacementEngine::default();
        let fp = Footprint::new(1.0, 1.0, 1.0);

        let mut existing: Vec<PlacedElement> = vec![];
        let mut fallback = None;
        for _ in 0..10 {
            let p = engine.place(&fp, &existing, &room);
            if p.is_fallback() {
                fallback = Some(p);
                break;
            }
            existing.push(placed(p.position, fp));
        }

        let fallback = fallback.expect("a 3x3 room should saturate");
        let bounds = PlacementBounds::calculate(&room, &fp, 0.3);
        assert!(fallback.position.is_finite());
        assert!(fallback.position.x().abs() <= bounds.max_x);
        assert!(fallback.position.z().abs() <= bounds.max_z);
        assert_eq!(fallback.position, Position::ORIGIN);
    }

    #[test]
    fn oversized_element_does_not_panic() {
        let room = room(2.0, 2.0);
        let fp = Footprint::new(5.0, 1.0, 0.5);
        let existing: [PlacedElement; 0] = [];
        let p = PlacementEngine::default().place(&fp, &existing, &room);
        assert_eq!(p.outcome, PlacementOutcome::Fallback { n_candidates: 0 });
        assert!(p.position.is_finite());
        assert_eq!(p.position.y(), 0.0);
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let room = room(8.0, 5.0);
        let existing = vec![
            placed(Position::on_floor(0.2, -0.3), Footprint::new(2.0, 0.8, 1.5)),
            placed(Position::on_floor(-2.5, 1.0), Footprint::new(1.0, 1.5, 1.0)),
        ];
        let fp = Footprint::new(1.5, 2.0, 1.5);
        let engine = PlacementEngine::default();
        let first = engine.place(&fp, &existing, &room);
        for _ in 0..10 {
            assert_eq!(engine.place(&fp, &existing, &room), first);
        }
        assert_eq!(smart_position(&fp, &existing, &room), first.position);
    }
}
