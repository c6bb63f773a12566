//! Tests for the six-direction model and per-direction maps

#[cfg(test)]
mod tests {
    use socketwfc::spatial::direction::{Direction, DirectionMap, step};
    use std::collections::HashSet;

    // Tests opposite is an involution that stays on the same axis
    // Verified by mapping Forward to Forward in opposite
    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);

            let offset = direction.offset();
            let opposite = direction.opposite().offset();
            for axis in 0..3 {
                assert_eq!(offset[axis], -opposite[axis]);
            }
        }
    }

    // Tests offsets are the six distinct unit axis vectors
    // Verified by giving Back the same offset as Forward
    #[test]
    fn test_offsets_are_distinct_unit_vectors() {
        let offsets: HashSet<[i32; 3]> = Direction::ALL.iter().map(|d| d.offset()).collect();
        assert_eq!(offsets.len(), 6);
        for offset in offsets {
            let length: i32 = offset.iter().map(|v| v.abs()).sum();
            assert_eq!(length, 1);
        }
        assert_eq!(Direction::Up.offset(), [0, 1, 0]);
        assert_eq!(Direction::Left.offset(), [-1, 0, 0]);
        assert_eq!(Direction::Forward.offset(), [0, 0, 1]);
    }

    // Tests the quarter turn cycle and that Up/Down stay fixed
    // Verified by swapping the Right and Back targets in quarter_turn
    #[test]
    fn test_quarter_turn_cycle() {
        assert_eq!(Direction::Left.quarter_turn(), Direction::Forward);
        assert_eq!(Direction::Forward.quarter_turn(), Direction::Right);
        assert_eq!(Direction::Right.quarter_turn(), Direction::Back);
        assert_eq!(Direction::Back.quarter_turn(), Direction::Left);
        assert_eq!(Direction::Up.quarter_turn(), Direction::Up);
        assert_eq!(Direction::Down.quarter_turn(), Direction::Down);

        for direction in Direction::ALL {
            assert_eq!(direction.turned(4), direction);
            assert_eq!(direction.turned(0), direction);
            assert_eq!(direction.turned(5), direction.quarter_turn());
        }
    }

    // Tests index follows canonical order
    // Verified by swapping the Left and Right indices
    #[test]
    fn test_index_matches_canonical_order() {
        for (expected, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), expected);
        }
        assert!(Direction::Up.is_vertical());
        assert!(!Direction::Back.is_vertical());
    }

    // Tests map construction, lookup and iteration order
    // Verified by returning the down field for Up in get
    #[test]
    fn test_direction_map_lookup_and_order() {
        let mut map = DirectionMap::from_fn(Direction::index);
        assert_eq!(*map.get(Direction::Up), 0);
        assert_eq!(*map.get(Direction::Back), 5);

        *map.get_mut(Direction::Right) = 30;
        assert_eq!(map.right, 30);

        let order: Vec<Direction> = map.iter().map(|(direction, _)| direction).collect();
        assert_eq!(order, Direction::ALL.to_vec());

        let doubled = map.map(|_, value| value * 2);
        assert_eq!(doubled.right, 60);
        assert_eq!(doubled.forward, 8);
    }

    // Tests stepping off the low edge yields None
    // Verified by using wrapping arithmetic in step
    #[test]
    fn test_step_rejects_negative_coordinates() {
        assert_eq!(step([0, 0, 0], Direction::Left), None);
        assert_eq!(step([0, 0, 0], Direction::Down), None);
        assert_eq!(step([0, 0, 0], Direction::Back), None);
        assert_eq!(step([0, 0, 0], Direction::Right), Some([1, 0, 0]));
        assert_eq!(step([2, 3, 4], Direction::Up), Some([2, 4, 4]));
        assert_eq!(step([2, 3, 4], Direction::Back), Some([2, 3, 3]));
    }

    // Tests directions serialize as lowercase names
    // Verified by removing the rename_all attribute
    #[test]
    fn test_direction_serialization() {
        let json = serde_json::to_string(&Direction::Forward).unwrap();
        assert_eq!(json, "\"forward\"");
        assert_eq!(Direction::Forward.to_string(), "forward");

        let map = DirectionMap::from_fn(|d| d.index());
        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value["back"], 5);
    }
}
