mod footprint;
mod position;
mod rect;

#[doc(inline)]
pub use footprint::Footprint;
#[doc(inline)]
pub use position::Position;
#[doc(inline)]
pub use rect::Rect;
