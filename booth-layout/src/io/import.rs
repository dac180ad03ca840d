use crate::entities::{
    BoothDesign, BoothRequest, DesignElement, ElementKind, PlacedElement, PricingRates, Room,
};
use crate::geometry::primitives::{Footprint, Position};
use crate::io::ext_repr::{
    ExtBoothRequest, ExtDesign, ExtElement, ExtOccupant, ExtPlacementRequest, ExtRoom,
};
use anyhow::{Context, Result, ensure};
use log::{debug, warn};

/// Converts external representations of rooms, elements and designs into internal ones.
#[derive(Clone, Debug, Copy, Default)]
pub struct Importer {
    /// Rates used to price the imported designs
    pub pricing_rates: PricingRates,
}

impl Importer {
    pub fn new(pricing_rates: PricingRates) -> Importer {
        Importer { pricing_rates }
    }

    pub fn import_room(&self, ext_room: &ExtRoom) -> Result<Room> {
        Room::try_new(ext_room.width, ext_room.depth, ext_room.height)
    }

    pub fn import_occupant(&self, ext_occupant: &ExtOccupant) -> Result<PlacedElement> {
        Ok(PlacedElement {
            position: import_position(ext_occupant.position)?,
            footprint: Footprint::try_from(ext_occupant.size)?,
        })
    }

    /// Imports a placement request as the footprint to place, the occupants to avoid and the room.
    pub fn import_placement_request(
        &self,
        ext_request: &ExtPlacementRequest,
    ) -> Result<(Footprint, Vec<PlacedElement>, Room)> {
        let footprint = Footprint::try_from(ext_request.footprint)
            .context("invalid footprint of the element to place")?;
        let existing = ext_request
            .existing_elements
            .iter()
            .enumerate()
            .map(|(i, o)| {
                self.import_occupant(o)
                    .with_context(|| format!("invalid existing element {i}"))
            })
            .collect::<Result<Vec<_>>>()?;
        let room = self.import_room(&ext_request.room)?;
        Ok((footprint, existing, room))
    }

    /// Imports an element. Types missing from the element library are treated as interactive kiosks.
    pub fn import_element(&self, ext_element: &ExtElement) -> Result<DesignElement> {
        let kind = ElementKind::from_type_name(&ext_element.kind).unwrap_or_else(|| {
            warn!(
                "unknown element type '{}' for element {}, treating it as {}",
                ext_element.kind,
                ext_element.id,
                ElementKind::default()
            );
            ElementKind::default()
        });
        let footprint = Footprint::try_from(ext_element.size)
            .with_context(|| format!("invalid size of element {}", ext_element.id))?;
        let position = import_position(ext_element.position)
            .with_context(|| format!("invalid position of element {}", ext_element.id))?;

        Ok(DesignElement {
            id: ext_element.id.clone(),
            kind,
            position,
            footprint,
            rotation: ext_element.rotation,
            color: ext_element.color.clone(),
            material: ext_element.material.clone(),
            label: ext_element.label.clone(),
            price: ext_element.price,
            locked: ext_element.locked,
        })
    }

    /// Imports a design. The order of the elements is kept and their ids must be unique.
    pub fn import_design(&self, ext_design: &ExtDesign) -> Result<BoothDesign> {
        let room = self
            .import_room(&ext_design.dimensions)
            .context("invalid design dimensions")?;
        let mut design = BoothDesign::new(ext_design.name.clone(), room, self.pricing_rates);
        design.category = ext_design.category;
        design.style = ext_design.style;
        design.materials = ext_design.materials;
        design.colors = ext_design.colors.clone();

        for ext_element in &ext_design.elements {
            design.insert_element(self.import_element(ext_element)?)?;
        }
        if let Some(area) = ext_design.billed_area {
            design.set_billed_area(area)?;
        }

        debug!(
            "imported design '{}': {}x{} room, {} elements",
            design.name,
            room.width,
            room.depth,
            design.elements().len()
        );
        Ok(design)
    }

    pub fn import_request(&self, ext_request: &ExtBoothRequest) -> Result<BoothRequest> {
        ensure!(
            !ext_request.company_name.trim().is_empty(),
            "booth request without a company name"
        );
        Ok(BoothRequest {
            company_name: ext_request.company_name.clone(),
            event_name: ext_request.event_name.clone(),
            booth_size_sqm: ext_request.booth_size_sqm,
            preferred_style: ext_request.preferred_style.clone(),
            industry: ext_request.industry.clone(),
            budget: ext_request.budget,
        })
    }
}

fn import_position(p: [f64; 3]) -> Result<Position> {
    let position = Position::from(p);
    ensure!(position.is_finite(), "non-finite position: {p:?}");
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext_element(id: &str, kind: &str, size: [f64; 3]) -> ExtElement {
        ExtElement {
            id: id.into(),
            kind: kind.into(),
            position: [0.0, 0.0, 0.0],
            size,
            rotation: [0.0; 3],
            color: "#3B82F6".into(),
            material: "metal".into(),
            label: id.into(),
            price: 100,
            locked: false,
        }
    }

    #[test]
    fn placement_request_from_json() {
        let json = r#"{
            "footprint": [1, 1, 1],
            "existingElements": [{"position": [0, 0, 0], "size": [2, 1, 2]}],
            "room": {"width": 6, "depth": 6}
        }"#;
        let ext: ExtPlacementRequest = serde_json::from_str(json).unwrap();
        let (fp, existing, room) = Importer::default().import_placement_request(&ext).unwrap();
        assert_eq!(fp, Footprint::new(1.0, 1.0, 1.0));
        assert_eq!(existing.len(), 1);
        assert_eq!(room.height, 3.0);
    }

    #[test]
    fn unknown_types_become_kiosks() {
        let e = Importer::default()
            .import_element(&ext_element("x", "water_slide", [1.0, 1.0, 1.0]))
            .unwrap();
        assert_eq!(e.kind, ElementKind::InteractiveKiosk);
        // the element keeps its own size and price
        assert_eq!(e.footprint, Footprint::new(1.0, 1.0, 1.0));
        assert_eq!(e.price, 100);
    }

    #[test]
    fn rejects_invalid_input() {
        let importer = Importer::default();
        assert!(
            importer
                .import_element(&ext_element("x", "seating", [0.0, 1.0, 1.0]))
                .is_err()
        );
        let room = ExtRoom {
            width: -2.0,
            depth: 6.0,
            height: 3.0,
        };
        assert!(importer.import_room(&room).is_err());

        let huge = ExtPlacementRequest {
            footprint: [1.0, 1.0, 1.0],
            existing_elements: vec![],
            room: ExtRoom {
                width: 1e17,
                depth: 1e17,
                height: 3.0,
            },
        };
        assert!(importer.import_placement_request(&huge).is_err());

        let design = ExtDesign {
            name: "dup".into(),
            category: Default::default(),
            style: Default::default(),
            dimensions: ExtRoom {
                width: 6.0,
                depth: 6.0,
                height: 3.0,
            },
            materials: Default::default(),
            colors: Default::default(),
            elements: vec![
                ext_element("a", "seating", [2.0, 0.8, 1.5]),
                ext_element("a", "coffee_bar", [2.5, 1.1, 1.0]),
            ],
            billed_area: None,
            pricing: Default::default(),
        };
        assert!(importer.import_design(&design).is_err());
    }
}
