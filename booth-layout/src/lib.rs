#![doc = document_features::document_features!()]
//! Floor plan engine for exhibition booths: element catalog, smart placement with collision avoidance, pricing.

/// Geometric primitives on the booth floor
pub mod geometry;

/// Entities to model a booth design: rooms, elements, designs and their pricing
pub mod entities;

/// The smart placement engine: picks a floor position for a new element
pub mod placement;

/// Importing designs and placement requests into and exporting them out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
