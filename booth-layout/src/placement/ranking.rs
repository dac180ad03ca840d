use crate::geometry::primitives::Position;
use itertools::Itertools;
use ordered_float::OrderedFloat;

/// Orders candidates by ascending distance to the center of the floor.
/// The sort is stable: equidistant candidates keep the order in which they were generated.
pub fn rank_by_center_distance(candidates: impl IntoIterator<Item = Position>) -> Vec<Position> {
    candidates
        .into_iter()
        .sorted_by_cached_key(|c| OrderedFloat(c.center_distance()))
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_to_center_first() {
        let ranked = rank_by_center_distance([
            Position::on_floor(2.0, 2.0),
            Position::on_floor(0.5, 0.0),
            Position::on_floor(-1.0, 1.0),
        ]);
        assert_eq!(ranked[0], Position::on_floor(0.5, 0.0));
        assert_eq!(ranked[2], Position::on_floor(2.0, 2.0));
    }

    #[test]
    fn ties_keep_generation_order() {
        let ranked = rank_by_center_distance([
            Position::on_floor(3.0, 0.0),
            Position::on_floor(0.0, -1.0),
            Position::on_floor(-1.0, 0.0),
            Position::on_floor(1.0, 0.0),
            Position::on_floor(0.0, 1.0),
        ]);
        assert_eq!(
            ranked,
            vec![
                Position::on_floor(0.0, -1.0),
                Position::on_floor(-1.0, 0.0),
                Position::on_floor(1.0, 0.0),
                Position::on_floor(0.0, 1.0),
                Position::on_floor(3.0, 0.0),
            ]
        );
    }
}
