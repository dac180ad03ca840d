use crate::entities::{Occupant, Room};
use crate::geometry::primitives::{Footprint, Position, Rect};

/// True if an element with footprint `a_fp` at `a` and one with `b_fp` at `b` are closer than `buffer` on both axes.
/// Elements are treated as rectangular exclusion zones: only when both axes overlap is it a collision.
#[inline(always)]
pub fn occupants_collide(
    a: Position,
    a_fp: &Footprint,
    b: Position,
    b_fp: &Footprint,
    buffer: f64,
) -> bool {
    let dx = (a.x() - b.x()).abs();
    let dz = (a.z() - b.z()).abs();
    let min_dist_x = (a_fp.size_x + b_fp.size_x) / 2.0 + buffer;
    let min_dist_z = (a_fp.size_z + b_fp.size_z) / 2.0 + buffer;
    dx < min_dist_x && dz < min_dist_z
}

/// Rejects candidate positions for a new element that would overflow the room or crowd existing occupants.
pub struct CollisionFilter<'a, O: Occupant> {
    footprint: Footprint,
    existing: &'a [O],
    /// The room's floor shrunk by the boundary margin
    allowed: Rect,
    buffer: f64,
}

impl<'a, O: Occupant> CollisionFilter<'a, O> {
    pub fn new(
        footprint: Footprint,
        existing: &'a [O],
        room: &Room,
        boundary_margin: f64,
        buffer: f64,
    ) -> Self {
        //not built with Rect::resize_by, a margin exceeding the room must yield an inverted rect that rejects everything
        let allowed = Rect {
            x_min: -room.width / 2.0 + boundary_margin,
            z_min: -room.depth / 2.0 + boundary_margin,
            x_max: room.width / 2.0 - boundary_margin,
            z_max: room.depth / 2.0 - boundary_margin,
        };
        CollisionFilter {
            footprint,
            existing,
            allowed,
            buffer,
        }
    }

    /// True if the footprint centered at `candidate` stays within the room's margin.
    pub fn within_boundary(&self, candidate: Position) -> bool {
        let rect = self.footprint.rect_at(candidate.x(), candidate.z());
        self.allowed.contains_rect(&rect)
    }

    /// Index of the first existing occupant the candidate collides with, if any.
    pub fn first_collision(&self, candidate: Position) -> Option<usize> {
        self.existing.iter().position(|o| {
            occupants_collide(
                candidate,
                &self.footprint,
                o.position(),
                &o.footprint(),
                self.buffer,
            )
        })
    }

    /// True if the candidate passes both the boundary and the collision check.
    pub fn admits(&self, candidate: Position) -> bool {
        self.within_boundary(candidate) && self.first_collision(candidate).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PlacedElement;

    fn placed(x: f64, z: f64, size: [f64; 3]) -> PlacedElement {
        PlacedElement {
            position: Position::on_floor(x, z),
            footprint: Footprint::try_from(size).unwrap(),
        }
    }

    #[test]
    fn buffer_applies_on_both_axes() {
        let fp = Footprint::new(1.0, 1.0, 1.0);
        let other = Footprint::new(2.0, 1.0, 2.0);
        // required separation on each axis is (1 + 2) / 2 + 0.5 = 2.0
        assert!(occupants_collide(
            Position::on_floor(1.9, 0.0),
            &fp,
            Position::ORIGIN,
            &other,
            0.5
        ));
        assert!(!occupants_collide(
            Position::on_floor(2.0, 0.0),
            &fp,
            Position::ORIGIN,
            &other,
            0.5
        ));
        // close on x but far enough on z
        assert!(!occupants_collide(
            Position::on_floor(0.0, 2.0),
            &fp,
            Position::ORIGIN,
            &other,
            0.5
        ));
    }

    #[test]
    fn boundary_check_uses_its_own_margin() {
        let room = Room::try_new(4.0, 4.0, 3.0).unwrap();
        let existing: [PlacedElement; 0] = [];
        let filter = CollisionFilter::new(Footprint::new(1.0, 1.0, 1.0), &existing, &room, 0.1, 0.5);
        // right edge at 1.9 = 2 - 0.1
        assert!(filter.within_boundary(Position::on_floor(1.4, 0.0)));
        assert!(!filter.within_boundary(Position::on_floor(1.45, 0.0)));
        assert!(!filter.within_boundary(Position::on_floor(0.0, -1.5)));
    }

    #[test]
    fn reports_first_colliding_occupant() {
        let room = Room::try_new(10.0, 10.0, 3.0).unwrap();
        let existing = [placed(4.0, 4.0, [1.0, 1.0, 1.0]), placed(0.0, 0.0, [2.0, 1.0, 2.0])];
        let filter = CollisionFilter::new(Footprint::new(1.0, 1.0, 1.0), &existing, &room, 0.1, 0.5);
        assert_eq!(filter.first_collision(Position::on_floor(1.0, 1.0)), Some(1));
        assert_eq!(filter.first_collision(Position::on_floor(-3.0, 3.0)), None);
        assert!(filter.admits(Position::on_floor(-3.0, 3.0)));
    }
}
