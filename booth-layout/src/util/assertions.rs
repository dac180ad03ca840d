use crate::entities::{BoothDesign, Occupant, Room};
use crate::geometry::primitives::{Footprint, Position};
use crate::placement::occupants_collide;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// True if the footprint centered at `pos` lies within the floor of `room` shrunk by `margin`.
/// Tolerates floating point error on the edges.
pub fn footprint_within_room(pos: Position, footprint: &Footprint, room: &Room, margin: f64) -> bool {
    let allowed = if margin == 0.0 {
        Some(room.outline())
    } else {
        room.interior(margin)
    };
    match allowed {
        Some(allowed) => allowed.almost_contains_rect(&footprint.rect_at(pos.x(), pos.z())),
        None => false,
    }
}

/// True if the footprint centered at `pos` is within `buffer` of any of the `occupants` on both axes.
pub fn collides_with_any<O: Occupant>(
    pos: Position,
    footprint: &Footprint,
    occupants: &[O],
    buffer: f64,
) -> bool {
    occupants
        .iter()
        .any(|o| occupants_collide(pos, footprint, o.position(), &o.footprint(), buffer))
}

pub fn design_ids_unique(design: &BoothDesign) -> bool {
    let duplicates = design
        .elements()
        .iter()
        .map(|e| e.id.as_str())
        .duplicates()
        .collect_vec();
    if !duplicates.is_empty() {
        error!("design '{}' has duplicate element ids: {duplicates:?}", design.name);
        return false;
    }
    true
}

/// True if every element of the design lies on the floor and has a finite position.
pub fn design_elements_on_floor(design: &BoothDesign) -> bool {
    design.elements().iter().all(|e| {
        e.position.is_finite() && footprint_within_room(e.position, &e.footprint, design.room(), 0.0)
    })
}
