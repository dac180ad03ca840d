use crate::entities::{DesignElement, ElementKind, Pricing, PricingRates, Room};
use crate::geometry::primitives::Position;
use crate::placement::{Placement, PlacementEngine};
use crate::util::assertions;
use anyhow::{Result, anyhow, ensure};
use log::debug;
use serde::{Deserialize, Serialize};

/// Industry a booth design targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Tech,
    Healthcare,
    Finance,
    Retail,
    Automotive,
    Energy,
    #[default]
    Custom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Modern,
    Futuristic,
    Minimal,
    Luxury,
    Industrial,
    Eco,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorMaterial {
    #[default]
    Wood,
    Marble,
    Concrete,
    Carpet,
    Metal,
    Glass,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallMaterial {
    #[default]
    Drywall,
    Glass,
    Metal,
    Fabric,
    LedPanel,
    Bamboo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CeilingMaterial {
    #[default]
    Standard,
    Suspended,
    Exposed,
    Curved,
    LedSky,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Materials {
    pub floor: FloorMaterial,
    pub walls: WallMaterial,
    pub ceiling: CeilingMaterial,
}

/// Hex color strings of a design
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for Colors {
    fn default() -> Self {
        Colors {
            primary: "#3B82F6".into(),
            secondary: "#F3F4F6".into(),
            accent: "#10B981".into(),
        }
    }
}

/// Material assigned to elements added from the library
pub const DEFAULT_ELEMENT_MATERIAL: &str = "metal";

/// A booth: a room and the ordered list of elements placed in it.
///
/// The element list is only changed through the methods below, which keep the pricing up to date.
/// New elements are appended at the end, removed elements are filtered out, the order of the others is preserved.
#[derive(Clone, Debug)]
pub struct BoothDesign {
    pub name: String,
    pub category: Category,
    pub style: Style,
    pub materials: Materials,
    pub colors: Colors,
    room: Room,
    elements: Vec<DesignElement>,
    rates: PricingRates,
    pricing: Pricing,
    /// Area billed instead of the room's when the booth was requested by size,
    /// cleared by the first change to the room or the elements
    billed_area: Option<f64>,
    /// Counter used to generate element ids
    next_id: u64,
}

impl BoothDesign {
    pub fn new(name: impl Into<String>, room: Room, rates: PricingRates) -> Self {
        let mut design = BoothDesign {
            name: name.into(),
            category: Category::default(),
            style: Style::default(),
            materials: Materials::default(),
            colors: Colors::default(),
            room,
            elements: vec![],
            rates,
            pricing: Pricing::default(),
            billed_area: None,
            next_id: 0,
        };
        design.update_pricing();
        design
    }

    /// Picks a position for a new element of type `kind` with the `engine` and appends it to the design.
    /// Returns the id of the new element and how it was placed.
    pub fn add_element(&mut self, kind: ElementKind, engine: &PlacementEngine) -> (String, Placement) {
        let spec = kind.spec(&self.room);
        let placement = engine.place(&spec.footprint, &self.elements, &self.room);
        let id = self.fresh_id(kind);

        self.elements.push(DesignElement {
            id: id.clone(),
            kind,
            position: placement.position,
            footprint: spec.footprint,
            rotation: [0.0; 3],
            color: self.colors.primary.clone(),
            material: DEFAULT_ELEMENT_MATERIAL.into(),
            label: spec.label.into(),
            price: spec.price,
            locked: false,
        });
        self.elements_changed();

        debug_assert!(assertions::design_ids_unique(self));
        (id, placement)
    }

    /// Appends an element as is, without placing it. Fails if its id is already in use.
    pub fn insert_element(&mut self, element: DesignElement) -> Result<()> {
        ensure!(
            self.element(&element.id).is_none(),
            "duplicate element id: {}",
            element.id
        );
        self.elements.push(element);
        self.elements_changed();
        Ok(())
    }

    /// Removes the element with the given id, returns `None` if there is no such element.
    pub fn remove_element(&mut self, id: &str) -> Option<DesignElement> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        let removed = self.elements.remove(index);
        self.elements_changed();
        Some(removed)
    }

    /// Moves an element to (`x`, `z`), clamped so its footprint stays on the floor. Its height is kept.
    /// Returns the position the element ended up at.
    pub fn move_element(&mut self, id: &str, x: f64, z: f64) -> Result<Position> {
        let room = self.room;
        let element = self
            .elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| anyhow!("no element with id {id}"))?;
        ensure!(!element.locked, "element {id} is locked");

        let lim_x = room.width / 2.0 - element.footprint.half_x();
        let lim_z = room.depth / 2.0 - element.footprint.half_z();
        element.position = Position(
            f64::max(-lim_x, f64::min(lim_x, x)),
            element.position.y(),
            f64::max(-lim_z, f64::min(lim_z, z)),
        );
        let position = element.position;
        debug!("moved element {id} to {position}");
        self.elements_changed();
        Ok(position)
    }

    pub fn set_locked(&mut self, id: &str, locked: bool) -> Result<()> {
        let element = self
            .elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| anyhow!("no element with id {id}"))?;
        element.locked = locked;
        self.elements_changed();
        Ok(())
    }

    /// Changes the room, each dimension clamped to the supported range.
    /// Elements stay where they are. From now on the room's own area is billed.
    pub fn resize_room(&mut self, width: f64, depth: f64, height: f64) -> Room {
        self.room = Room::clamped(width, depth, height);
        self.billed_area = None;
        self.update_pricing();
        self.room
    }

    /// Bills `area` sqm instead of the area of the room, until the room or any element changes.
    pub fn set_billed_area(&mut self, area: f64) -> Result<()> {
        ensure!(area.is_finite() && area > 0.0, "billed area should be positive, got {area}");
        self.billed_area = Some(area);
        self.update_pricing();
        Ok(())
    }

    /// Area the pricing is based on
    pub fn billed_area(&self) -> f64 {
        self.billed_area.unwrap_or_else(|| self.room.area())
    }

    pub fn change_rates(&mut self, rates: PricingRates) {
        self.rates = rates;
        self.update_pricing();
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn elements(&self) -> &[DesignElement] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&DesignElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub fn rates(&self) -> &PricingRates {
        &self.rates
    }

    /// Any change to the element list reprices the design on the room's own area.
    fn elements_changed(&mut self) {
        self.billed_area = None;
        self.update_pricing();
    }

    fn update_pricing(&mut self) {
        self.pricing = Pricing::compute(
            &self.rates,
            self.billed_area(),
            self.elements.iter().map(|e| e.price),
        );
    }

    fn fresh_id(&mut self, kind: ElementKind) -> String {
        loop {
            let id = format!("{}-{}", kind.type_name(), self.next_id);
            self.next_id += 1;
            if self.element(&id).is_none() {
                return id;
            }
        }
    }
}

impl Default for BoothDesign {
    fn default() -> Self {
        BoothDesign::new("Custom Design", Room::default(), PricingRates::default())
    }
}
