use crate::entities::{Category, Colors, Materials, Pricing, Style};
use serde::{Deserialize, Serialize};

/// External representation of a [`Room`](crate::entities::Room).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRoom {
    pub width: f64,
    pub depth: f64,
    /// Irrelevant to placement, 3 meters if not specified
    #[serde(default = "default_room_height")]
    pub height: f64,
}

fn default_room_height() -> f64 {
    3.0
}

/// External representation of a [`PlacedElement`](crate::entities::PlacedElement).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtOccupant {
    /// Center of the element, `[x, y, z]`
    pub position: [f64; 3],
    /// Bounding box dimensions, `[size_x, size_y, size_z]`
    pub size: [f64; 3],
}

/// A single request to the placement engine: where should an element with `footprint` go?
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacementRequest {
    /// Bounding box dimensions of the new element, `[size_x, size_y, size_z]`
    pub footprint: [f64; 3],
    /// Elements already in the room
    #[serde(default, alias = "existingElements")]
    pub existing_elements: Vec<ExtOccupant>,
    pub room: ExtRoom,
}

/// Answer of the placement engine to an [`ExtPlacementRequest`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlacement {
    /// Position for the new element, `[x, 0, z]`
    pub position: [f64; 3],
    pub outcome: ExtPlacementOutcome,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtPlacementOutcome {
    /// A collision free grid candidate, `rank` in order of distance to the center
    Grid { rank: usize, n_candidates: usize },
    /// No collision free candidate existed
    Fallback { n_candidates: usize },
}

/// External representation of a [`DesignElement`](crate::entities::DesignElement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtElement {
    pub id: String,
    /// Element type as named in the element library, e.g. `coffee_bar`
    #[serde(rename = "type")]
    pub kind: String,
    pub position: [f64; 3],
    pub size: [f64; 3],
    #[serde(default)]
    pub rotation: [f64; 3],
    pub color: String,
    pub material: String,
    pub label: String,
    /// Price in SAR
    pub price: u64,
    #[serde(default)]
    pub locked: bool,
}

/// External representation of a [`BoothDesign`](crate::entities::BoothDesign).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtDesign {
    pub name: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub style: Style,
    pub dimensions: ExtRoom,
    #[serde(default)]
    pub materials: Materials,
    #[serde(default)]
    pub colors: Colors,
    #[serde(default)]
    pub elements: Vec<ExtElement>,
    /// Area billed instead of the room's (sqm), for designs generated from a requested booth size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billed_area: Option<f64>,
    /// Ignored on import, the pricing is always recomputed
    #[serde(default, skip_deserializing)]
    pub pricing: Pricing,
}

/// External representation of a [`BoothRequest`](crate::entities::BoothRequest).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBoothRequest {
    pub company_name: String,
    pub event_name: String,
    pub booth_size_sqm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_style: Option<String>,
    pub industry: String,
    /// Budget in SAR
    #[serde(default, alias = "budget_inr", skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}
