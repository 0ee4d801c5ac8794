//! Hive rules engine
//!
//! This crate answers the geometric questions a Hive game keeps asking:
//! - Which pieces can be lifted without splitting the hive
//! - Where a new piece of a given colour may be placed
//! - Where a queen, beetle, spider, ant or grasshopper can move to
//!
//! # Architecture
//!
//! Every query is a pure function of a [`Board`] snapshot. Nothing is cached
//! between calls, so a board can be shared freely across threads. Turn order,
//! piece supply and stacking belong to whatever drives the game.
//!
//! # Modules
//!
//! - [`hex`]: Axial coordinates and the ring of six directions
//! - [`piece`]: Colours, kinds and their notation codes
//! - [`board`]: The occupancy snapshot and neighbour queries
//! - [`slide`]: The gate/flank test for sliding between cells
//! - [`connectivity`]: Cut vertices and movable pieces (one-hive rule)
//! - [`placement`]: Legal cells for new pieces
//! - [`perimeter`]: The boundary graph crawling pieces travel along
//! - [`moves`]: Per-kind destination generators

pub mod board;
pub mod connectivity;
pub mod hex;
pub mod moves;
pub mod perimeter;
pub mod piece;
pub mod placement;
pub mod slide;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, BoardError, BoardJson, PlacedPiece};
pub use connectivity::{components, cut_vertices};
pub use hex::{HexCoord, DIRECTIONS};
pub use moves::Movement;
pub use perimeter::{PerimeterGraph, PerimeterNode, PerimeterNodeJson};
pub use piece::{Colour, Kind, Piece};
pub use slide::Slide;
