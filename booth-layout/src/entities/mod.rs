mod design;
mod element;
mod preset;
mod pricing;
mod room;

#[doc(inline)]
pub use room::{MAX_ROOM_DIM, MIN_ROOM_DIM, Room};

#[doc(inline)]
pub use element::{DesignElement, ElementKind, ElementSpec, Occupant, PlacedElement};

#[doc(inline)]
pub use design::{
    BoothDesign, Category, CeilingMaterial, Colors, DEFAULT_ELEMENT_MATERIAL, FloorMaterial,
    Materials, Style, WallMaterial,
};

#[doc(inline)]
pub use pricing::{Pricing, PricingRates};

#[doc(inline)]
pub use preset::{BoothRequest, INDUSTRY_HEALTHCARE, INDUSTRY_TECH, generate_preset};
