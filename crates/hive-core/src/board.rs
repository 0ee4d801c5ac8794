//! Occupancy snapshot of the playing surface.
//!
//! This module contains:
//! - The `Board` mapping from coordinate to piece
//! - Neighbour queries used by every rule
//! - Board validation and the JSON-friendly snapshot format
//!
//! The board is a flat, single-layer view. Whatever owns the game (turns,
//! supply, stacking) hands the engine a `Board` and reads back sets of cells.

use crate::hex::HexCoord;
use crate::piece::{Colour, Piece};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised when building or checking a board
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Conflicting pieces at {coord:?}: {existing:?} and {incoming:?}")]
    ConflictingPiece {
        coord: HexCoord,
        existing: Piece,
        incoming: Piece,
    },

    #[error("Piece count for {colour:?} is {recorded} but the board holds {actual}")]
    CountMismatch {
        colour: Colour,
        recorded: usize,
        actual: usize,
    },

    #[error("Invalid board JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The pieces in play, indexed by coordinate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BoardJson", try_from = "BoardJson")]
pub struct Board {
    /// Every occupied cell
    pieces: HashMap<HexCoord, Piece>,
    /// Pieces per colour, indexed by `Colour::index`
    counts: [usize; 2],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from placed pieces.
    ///
    /// Listing the same piece twice at a coordinate is harmless; two
    /// different pieces at one coordinate is rejected.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (HexCoord, Piece)>,
    {
        let mut board = Board::new();
        for (coord, piece) in pieces {
            match board.piece_at(coord) {
                Some(existing) if existing != piece => {
                    return Err(BoardError::ConflictingPiece {
                        coord,
                        existing,
                        incoming: piece,
                    });
                }
                Some(_) => {}
                None => {
                    board.insert(coord, piece);
                }
            }
        }
        Ok(board)
    }

    // ==================== Mutation ====================

    /// Put a piece at `coord`, returning whatever was there before
    pub fn insert(&mut self, coord: HexCoord, piece: Piece) -> Option<Piece> {
        let previous = self.pieces.insert(coord, piece);
        if let Some(old) = previous {
            self.counts[old.colour.index()] -= 1;
        }
        self.counts[piece.colour.index()] += 1;
        previous
    }

    /// Take the piece off `coord`, if any
    pub fn remove(&mut self, coord: HexCoord) -> Option<Piece> {
        let removed = self.pieces.remove(&coord);
        if let Some(piece) = removed {
            self.counts[piece.colour.index()] -= 1;
        }
        removed
    }

    /// A copy of this board with the piece at `coord` picked up
    pub fn lifted(&self, coord: HexCoord) -> Board {
        let mut board = self.clone();
        board.remove(coord);
        board
    }

    // ==================== Query Methods ====================

    /// Number of pieces on the board
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether no piece has been placed yet
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Get the piece at a coordinate
    pub fn piece_at(&self, coord: HexCoord) -> Option<Piece> {
        self.pieces.get(&coord).copied()
    }

    pub fn is_occupied(&self, coord: HexCoord) -> bool {
        self.pieces.contains_key(&coord)
    }

    /// Number of pieces of one colour
    pub fn count(&self, colour: Colour) -> usize {
        self.counts[colour.index()]
    }

    /// All occupied coordinates, in no particular order
    pub fn occupied(&self) -> impl Iterator<Item = HexCoord> + '_ {
        self.pieces.keys().copied()
    }

    /// All placed pieces, in no particular order
    pub fn pieces(&self) -> impl Iterator<Item = (HexCoord, Piece)> + '_ {
        self.pieces.iter().map(|(coord, piece)| (*coord, *piece))
    }

    /// Occupancy of the six neighbours of `coord`, in direction order
    pub fn neighbour_occupancy(&self, coord: HexCoord) -> [bool; 6] {
        coord.neighbors().map(|n| self.is_occupied(n))
    }

    /// Neighbours of `coord` that hold a piece
    pub fn occupied_neighbours(&self, coord: HexCoord) -> Vec<HexCoord> {
        coord
            .neighbors()
            .into_iter()
            .filter(|n| self.is_occupied(*n))
            .collect()
    }

    /// Neighbours of `coord` that are empty
    pub fn unoccupied_neighbours(&self, coord: HexCoord) -> Vec<HexCoord> {
        coord
            .neighbors()
            .into_iter()
            .filter(|n| !self.is_occupied(*n))
            .collect()
    }

    /// Whether `coord` touches at least one piece
    pub fn touches_hive(&self, coord: HexCoord) -> bool {
        coord.neighbors().iter().any(|n| self.is_occupied(*n))
    }

    // ==================== Validation Methods ====================

    /// Verify the per-colour counts agree with the pieces on the board
    pub fn check_consistency(&self) -> Result<(), BoardError> {
        for colour in Colour::ALL {
            let actual = self.pieces.values().filter(|p| p.colour == colour).count();
            let recorded = self.count(colour);
            if actual != recorded {
                return Err(BoardError::CountMismatch {
                    colour,
                    recorded,
                    actual,
                });
            }
        }
        Ok(())
    }

    // ==================== Snapshots ====================

    /// Convert to a JSON-friendly representation with an array instead of a HashMap.
    /// Sorted by coordinate so equal boards give equal output.
    pub fn to_json_friendly(&self) -> BoardJson {
        let mut pieces: Vec<PlacedPiece> = self
            .pieces()
            .map(|(coord, piece)| PlacedPiece {
                q: coord.q,
                r: coord.r,
                piece,
            })
            .collect();
        pieces.sort_by_key(|p| (p.q, p.r));
        BoardJson { pieces }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load a board from a JSON string
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Extend<(HexCoord, Piece)> for Board {
    fn extend<I: IntoIterator<Item = (HexCoord, Piece)>>(&mut self, iter: I) {
        for (coord, piece) in iter {
            self.insert(coord, piece);
        }
    }
}

impl FromIterator<(HexCoord, Piece)> for Board {
    fn from_iter<I: IntoIterator<Item = (HexCoord, Piece)>>(iter: I) -> Self {
        let mut board = Board::new();
        board.extend(iter);
        board
    }
}

/// JSON-friendly board representation with an array instead of a HashMap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardJson {
    pub pieces: Vec<PlacedPiece>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub q: i32,
    pub r: i32,
    pub piece: Piece,
}

impl From<Board> for BoardJson {
    fn from(board: Board) -> Self {
        board.to_json_friendly()
    }
}

impl TryFrom<BoardJson> for Board {
    type Error = BoardError;

    fn try_from(json: BoardJson) -> Result<Self, Self::Error> {
        Board::from_pieces(
            json.pieces
                .into_iter()
                .map(|p| (HexCoord::new(p.q, p.r), p.piece)),
        )
    }
}
