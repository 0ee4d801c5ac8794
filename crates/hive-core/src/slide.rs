//! The gate/flank test for sliding a piece between neighbouring cells.
//!
//! Moving from a hex to its neighbour in direction `i` passes between the
//! two cells in directions `i - 1` and `i + 1`. If both hold pieces the gap
//! is too narrow (gated). If neither does, the mover would lose contact with
//! the hive half way (detached). Exactly one occupied flank makes a legal
//! ground-level slide, and which flank it is tells us the rotational sense.

use crate::board::Board;
use crate::hex::{next_direction, prev_direction, HexCoord};
use serde::{Deserialize, Serialize};

/// What lies in one direction from a hex, for a piece sliding out of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slide {
    /// The neighbour itself holds a piece
    Occupied,
    /// Both flanks occupied: no room to squeeze through
    Gated,
    /// Both flanks empty: nothing to slide along
    Detached,
    /// Only the flank after it (direction `i + 1`) is occupied: the hive is
    /// on the mover's left
    Left,
    /// Only the flank before it (direction `i - 1`) is occupied: the hive is
    /// on the mover's right
    Right,
}

impl Slide {
    /// Classify direction `i` given the occupancy of all six neighbours
    pub fn classify(occupancy: [bool; 6], i: usize) -> Slide {
        let i = i % 6;
        if occupancy[i] {
            return Slide::Occupied;
        }
        match (occupancy[prev_direction(i)], occupancy[next_direction(i)]) {
            (true, true) => Slide::Gated,
            (false, false) => Slide::Detached,
            (false, true) => Slide::Left,
            (true, false) => Slide::Right,
        }
    }

    /// Classify all six directions at once
    pub fn classify_all(occupancy: [bool; 6]) -> [Slide; 6] {
        [0, 1, 2, 3, 4, 5].map(|i| Slide::classify(occupancy, i))
    }

    /// Whether this is a legal one-step slide
    pub fn is_slide(self) -> bool {
        matches!(self, Slide::Left | Slide::Right)
    }

    /// The classification seen when stepping back the other way
    pub fn reversed(self) -> Slide {
        match self {
            Slide::Left => Slide::Right,
            Slide::Right => Slide::Left,
            other => other,
        }
    }
}

impl Board {
    /// Slide classification of each direction out of `coord`
    pub fn slides(&self, coord: HexCoord) -> [Slide; 6] {
        Slide::classify_all(self.neighbour_occupancy(coord))
    }

    /// Neighbours reachable from `coord` by one legal slide
    pub fn slide_targets(&self, coord: HexCoord) -> Vec<HexCoord> {
        self.slide_targets_where(coord, Slide::is_slide)
    }

    /// Empty neighbours of `coord` whose flanks are both empty too.
    ///
    /// These are the cells that belong to `coord` alone: none of them is also
    /// reachable around a piece already next to `coord`.
    pub fn unique_unoccupied_neighbours(&self, coord: HexCoord) -> Vec<HexCoord> {
        self.slide_targets_where(coord, |s| s == Slide::Detached)
    }

    pub(crate) fn slide_targets_where<F>(&self, coord: HexCoord, keep: F) -> Vec<HexCoord>
    where
        F: Fn(Slide) -> bool,
    {
        coord
            .neighbors()
            .into_iter()
            .zip(self.slides(coord))
            .filter(|(_, slide)| keep(*slide))
            .map(|(neighbor, _)| neighbor)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::DIRECTIONS;
    use crate::piece::{Colour, Kind, Piece};

    fn board_with(coords: &[HexCoord]) -> Board {
        coords
            .iter()
            .map(|c| (*c, Piece::new(Colour::White, Kind::Ant)))
            .collect()
    }

    #[test]
    fn test_classify_flanks() {
        let occupancy = [true, false, false, true, false, false];
        assert_eq!(Slide::classify(occupancy, 0), Slide::Occupied);
        assert_eq!(Slide::classify(occupancy, 1), Slide::Right);
        assert_eq!(Slide::classify(occupancy, 2), Slide::Left);
        assert_eq!(Slide::classify(occupancy, 4), Slide::Right);
        assert_eq!(Slide::classify(occupancy, 5), Slide::Left);

        let gate = [true, false, true, false, false, false];
        assert_eq!(Slide::classify(gate, 1), Slide::Gated);
        assert_eq!(Slide::classify(gate, 4), Slide::Detached);
    }

    #[test]
    fn test_no_neighbours_all_detached() {
        assert_eq!(Slide::classify_all([false; 6]), [Slide::Detached; 6]);
    }

    #[test]
    fn test_unique_unoccupied_lone_piece() {
        let board = board_with(&[HexCoord::CENTRE]);
        assert_eq!(board.unique_unoccupied_neighbours(HexCoord::CENTRE).len(), 6);
    }

    #[test]
    fn test_unique_unoccupied_one_neighbour() {
        let board = board_with(&[HexCoord::CENTRE, DIRECTIONS[0]]);
        assert_eq!(
            board.unique_unoccupied_neighbours(HexCoord::CENTRE),
            vec![DIRECTIONS[2], DIRECTIONS[3], DIRECTIONS[4]]
        );
    }

    #[test]
    fn test_unique_unoccupied_opposite_neighbours() {
        let board = board_with(&[HexCoord::CENTRE, DIRECTIONS[0], DIRECTIONS[3]]);
        assert!(board.unique_unoccupied_neighbours(HexCoord::CENTRE).is_empty());
    }

    #[test]
    fn test_unique_unoccupied_neighbours_two_apart() {
        let board = board_with(&[HexCoord::CENTRE, DIRECTIONS[0], DIRECTIONS[4]]);
        assert_eq!(board.unique_unoccupied_neighbours(HexCoord::CENTRE), vec![DIRECTIONS[2]]);
    }

    #[test]
    fn test_slide_targets_around_single_piece() {
        let board = board_with(&[DIRECTIONS[0]]);
        assert_eq!(
            board.slide_targets(HexCoord::CENTRE),
            vec![DIRECTIONS[1], DIRECTIONS[5]]
        );
        let slides = board.slides(HexCoord::CENTRE);
        assert_eq!(slides[1], Slide::Right);
        assert_eq!(slides[5], Slide::Left);
    }

    #[test]
    fn test_reverse_step_has_opposite_sense() {
        let board = board_with(&[HexCoord::new(1, 0), HexCoord::new(-1, 1), HexCoord::new(0, -2)]);
        for from in [HexCoord::CENTRE, HexCoord::new(1, -1), HexCoord::new(0, 1)] {
            for (i, slide) in board.slides(from).into_iter().enumerate() {
                if !slide.is_slide() {
                    continue;
                }
                let to = from.neighbor(i);
                let back = (i + 3) % 6;
                assert_eq!(board.slides(to)[back], slide.reversed(), "{:?} -> {:?}", from, to);
            }
        }
    }
}
