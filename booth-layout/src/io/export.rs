use crate::entities::{BoothDesign, DesignElement, Room};
use crate::io::ext_repr::{ExtDesign, ExtElement, ExtPlacement, ExtPlacementOutcome, ExtRoom};
use crate::placement::{Placement, PlacementOutcome};
use itertools::Itertools;

pub fn export_room(room: &Room) -> ExtRoom {
    ExtRoom {
        width: room.width,
        depth: room.depth,
        height: room.height,
    }
}

pub fn export_element(element: &DesignElement) -> ExtElement {
    ExtElement {
        id: element.id.clone(),
        kind: element.kind.type_name().to_string(),
        position: element.position.into(),
        size: element.footprint.into(),
        rotation: element.rotation,
        color: element.color.clone(),
        material: element.material.clone(),
        label: element.label.clone(),
        price: element.price,
        locked: element.locked,
    }
}

/// Exports a [`BoothDesign`], elements in the order of the design, with its current pricing.
pub fn export_design(design: &BoothDesign) -> ExtDesign {
    let billed_area = match design.billed_area() == design.room().area() {
        true => None,
        false => Some(design.billed_area()),
    };
    ExtDesign {
        name: design.name.clone(),
        category: design.category,
        style: design.style,
        dimensions: export_room(design.room()),
        materials: design.materials,
        colors: design.colors.clone(),
        elements: design.elements().iter().map(export_element).collect_vec(),
        billed_area,
        pricing: *design.pricing(),
    }
}

pub fn export_placement(placement: &Placement) -> ExtPlacement {
    let outcome = match placement.outcome {
        PlacementOutcome::Grid { rank, n_candidates } => {
            ExtPlacementOutcome::Grid { rank, n_candidates }
        }
        PlacementOutcome::Fallback { n_candidates } => ExtPlacementOutcome::Fallback { n_candidates },
    };
    ExtPlacement {
        position: placement.position.into(),
        outcome,
    }
}
