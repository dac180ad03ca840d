use crate::entities::Room;
use crate::geometry::primitives::{Footprint, Position, Rect};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Anything that occupies floor space in a booth and must be avoided when placing new elements.
pub trait Occupant {
    /// Center of the occupant on the floor
    fn position(&self) -> Position;

    /// Bounding box dimensions of the occupant
    fn footprint(&self) -> Footprint;

    /// The rectangle the occupant covers on the floor
    fn floor_rect(&self) -> Rect {
        let p = self.position();
        self.footprint().rect_at(p.x(), p.z())
    }
}

/// Minimal occupant: a footprint at a position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedElement {
    pub position: Position,
    pub footprint: Footprint,
}

impl Occupant for PlacedElement {
    fn position(&self) -> Position {
        self.position
    }

    fn footprint(&self) -> Footprint {
        self.footprint
    }
}

/// Types of elements in the booth element library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    #[default]
    InteractiveKiosk,
    HologramProjector,
    VideoWall,
    Seating,
    CoffeeBar,
    VrStation,
    ProductDisplay,
    BannerStand,
    ReceptionCounter,
}

/// Catalog entry of an [`ElementKind`] for a specific room.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementSpec {
    pub kind: ElementKind,
    pub footprint: Footprint,
    /// Price in SAR
    pub price: u64,
    pub label: &'static str,
}

impl ElementKind {
    pub const ALL: [ElementKind; 9] = [
        ElementKind::InteractiveKiosk,
        ElementKind::HologramProjector,
        ElementKind::VideoWall,
        ElementKind::Seating,
        ElementKind::CoffeeBar,
        ElementKind::VrStation,
        ElementKind::ProductDisplay,
        ElementKind::BannerStand,
        ElementKind::ReceptionCounter,
    ];

    /// The identifier used for this kind in external representations
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementKind::InteractiveKiosk => "interactive_kiosk",
            ElementKind::HologramProjector => "hologram_projector",
            ElementKind::VideoWall => "video_wall",
            ElementKind::Seating => "seating",
            ElementKind::CoffeeBar => "coffee_bar",
            ElementKind::VrStation => "vr_station",
            ElementKind::ProductDisplay => "product_display",
            ElementKind::BannerStand => "banner_stand",
            ElementKind::ReceptionCounter => "reception_counter",
        }
    }

    pub fn from_type_name(name: &str) -> Option<ElementKind> {
        ElementKind::ALL
            .into_iter()
            .find(|k| k.type_name() == name)
    }

    /// Catalog entry for this kind. Wall-like elements scale with the width of the `room`.
    pub fn spec(&self, room: &Room) -> ElementSpec {
        let (size, price, label) = match self {
            ElementKind::InteractiveKiosk => ([0.8, 1.6, 0.5], 11250, "Interactive Kiosk"),
            ElementKind::HologramProjector => ([1.0, 1.5, 1.0], 30000, "Hologram Projector"),
            ElementKind::VideoWall => (
                [f64::min(4.0, room.width * 0.8), 2.5, 0.2],
                45000,
                "Video Wall",
            ),
            ElementKind::Seating => ([2.0, 0.8, 1.5], 3000, "Lounge Seating"),
            ElementKind::CoffeeBar => ([2.5, 1.1, 1.0], 10500, "Coffee Bar"),
            ElementKind::VrStation => ([1.5, 2.0, 1.5], 18750, "VR Station"),
            ElementKind::ProductDisplay => ([1.2, 1.8, 0.8], 5625, "Product Display"),
            ElementKind::BannerStand => ([2.0, 3.0, 0.1], 1500, "Banner Stand"),
            ElementKind::ReceptionCounter => (
                [f64::min(3.0, room.width * 0.6), 1.1, 0.8],
                7500,
                "Reception Counter",
            ),
        };
        ElementSpec {
            kind: *self,
            footprint: Footprint::new(size[0], size[1], size[2]),
            price,
            label,
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// An element placed in a [`BoothDesign`](crate::entities::BoothDesign).
#[derive(Clone, Debug, PartialEq)]
pub struct DesignElement {
    /// Unique identifier within the design
    pub id: String,
    pub kind: ElementKind,
    pub position: Position,
    pub footprint: Footprint,
    /// Euler angles in radians, carried along for the renderer
    pub rotation: [f64; 3],
    pub color: String,
    pub material: String,
    pub label: String,
    /// Price in SAR
    pub price: u64,
    /// Locked elements cannot be moved
    pub locked: bool,
}

impl Occupant for DesignElement {
    fn position(&self) -> Position {
        self.position
    }

    fn footprint(&self) -> Footprint {
        self.footprint
    }
}

impl From<&DesignElement> for PlacedElement {
    fn from(e: &DesignElement) -> Self {
        PlacedElement {
            position: e.position,
            footprint: e.footprint,
        }
    }
}
