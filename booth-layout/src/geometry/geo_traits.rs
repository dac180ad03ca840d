use crate::geometry::primitives::Rect;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for shapes lying on the booth floor.
pub trait Shape {
    /// Axis-aligned bounding rectangle of the shape on the floor (x, z plane)
    fn bbox(&self) -> Rect;

    /// Floor area covered by the shape
    fn area(&self) -> f64 {
        self.bbox().area()
    }
}
