//! Where a new piece may enter the game.

use crate::board::Board;
use crate::hex::HexCoord;
use crate::piece::Colour;
use std::collections::HashSet;

impl Board {
    /// Legal cells for placing a new piece of `colour`.
    ///
    /// - An empty board only offers the centre.
    /// - The reply to the opening piece may go anywhere next to it.
    /// - After that a new piece must touch its own colour and must not touch
    ///   the opponent's.
    pub fn places(&self, colour: Colour) -> HashSet<HexCoord> {
        if self.is_empty() {
            return HashSet::from([HexCoord::CENTRE]);
        }

        if self.count(colour) == 0 && self.count(colour.opponent()) == 1 {
            return self.frontier();
        }

        self.frontier()
            .into_iter()
            .filter(|&cell| {
                let (same, other) = self.colour_contacts(cell, colour);
                same > 0 && other == 0
            })
            .collect()
    }

    /// Empty cells touching at least one piece
    pub fn frontier(&self) -> HashSet<HexCoord> {
        self.occupied()
            .flat_map(|coord| self.unoccupied_neighbours(coord))
            .collect()
    }

    /// Neighbours of `cell` held by `colour` and by its opponent
    fn colour_contacts(&self, cell: HexCoord, colour: Colour) -> (usize, usize) {
        cell.neighbors()
            .into_iter()
            .filter_map(|n| self.piece_at(n))
            .fold((0, 0), |(same, other), piece| {
                if piece.colour == colour {
                    (same + 1, other)
                } else {
                    (same, other + 1)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::DIRECTIONS;
    use crate::piece::{Kind, Piece};

    fn piece(colour: Colour) -> Piece {
        Piece::new(colour, Kind::Queen)
    }

    #[test]
    fn test_places_empty() {
        let board = Board::new();
        assert_eq!(board.places(Colour::White), HashSet::from([HexCoord::CENTRE]));
        assert_eq!(board.places(Colour::Black), HashSet::from([HexCoord::CENTRE]));
    }

    #[test]
    fn test_places_single() {
        let board: Board = [(HexCoord::CENTRE, piece(Colour::White))].into_iter().collect();
        let ring: HashSet<HexCoord> = DIRECTIONS.into_iter().collect();
        assert_eq!(board.places(Colour::White), ring);
        assert_eq!(board.places(Colour::Black), ring);
    }

    #[test]
    fn test_places_pair_split_evenly() {
        let board: Board = [
            (HexCoord::CENTRE, piece(Colour::White)),
            (DIRECTIONS[0], piece(Colour::Black)),
        ]
        .into_iter()
        .collect();
        let white = board.places(Colour::White);
        let black = board.places(Colour::Black);
        assert_eq!(white, HashSet::from([DIRECTIONS[2], DIRECTIONS[3], DIRECTIONS[4]]));
        assert_eq!(black.len(), 3);
        assert!(white.is_disjoint(&black));
        assert_eq!(board.frontier().len(), 8);
    }

    #[test]
    fn test_places_boxed_in() {
        let board: Board = [
            (HexCoord::CENTRE, piece(Colour::Black)),
            (DIRECTIONS[0], piece(Colour::White)),
            (DIRECTIONS[0] * 2, piece(Colour::Black)),
        ]
        .into_iter()
        .collect();
        assert!(board.places(Colour::White).is_empty());
        assert_eq!(board.places(Colour::Black).len(), 6);
    }

    #[test]
    fn test_places_absent_colour_after_opening() {
        let board: Board = [
            (HexCoord::CENTRE, piece(Colour::Black)),
            (DIRECTIONS[0], piece(Colour::Black)),
        ]
        .into_iter()
        .collect();
        assert!(board.places(Colour::White).is_empty());
        assert_eq!(board.places(Colour::Black).len(), 8);
    }
}
