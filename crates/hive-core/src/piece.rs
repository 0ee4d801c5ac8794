//! Piece identity: colour and kind.
//!
//! Only colour and kind are tracked. Two white ants are interchangeable as
//! far as the rules engine is concerned.

use serde::{Deserialize, Serialize};

use crate::moves::Movement;

/// Side a piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Colour {
    /// Light pieces, moves first
    White,
    /// Dark pieces
    Black,
}

impl Colour {
    /// Both colours, white first
    pub const ALL: [Colour; 2] = [Colour::White, Colour::Black];

    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }

    /// Single-letter code used by external notations
    pub fn code(self) -> char {
        match self {
            Colour::White => 'w',
            Colour::Black => 'b',
        }
    }

    /// Parse a single-letter colour code
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'w' => Some(Colour::White),
            'b' => Some(Colour::Black),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Bug type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    /// Queen bee - one step at a time
    Queen,
    /// Beetle - one step; climbing is handled outside this engine
    Beetle,
    /// Spider - exactly three steps around the hive
    Spider,
    /// Soldier ant - any distance around the hive
    Ant,
    /// Grasshopper - jumps over a straight line of pieces
    Grasshopper,
}

impl Kind {
    /// Every kind
    pub const ALL: [Kind; 5] = [
        Kind::Queen,
        Kind::Beetle,
        Kind::Spider,
        Kind::Ant,
        Kind::Grasshopper,
    ];

    /// Single-letter code used by external notations.
    ///
    /// Case matters: `B` is the queen bee, `b` the beetle.
    pub fn code(self) -> char {
        match self {
            Kind::Queen => 'B',
            Kind::Beetle => 'b',
            Kind::Spider => 's',
            Kind::Ant => 'a',
            Kind::Grasshopper => 'h',
        }
    }

    /// Parse a single-letter kind code
    pub fn from_code(c: char) -> Option<Self> {
        Kind::ALL.into_iter().find(|k| k.code() == c)
    }

    /// How pieces of this kind get around
    pub fn movement(self) -> Movement {
        match self {
            Kind::Queen | Kind::Beetle => Movement::Step,
            Kind::Spider => Movement::Crawl3,
            Kind::Ant => Movement::Crawl,
            Kind::Grasshopper => Movement::Jump,
        }
    }
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub colour: Colour,
    pub kind: Kind,
}

impl Piece {
    pub const fn new(colour: Colour, kind: Kind) -> Self {
        Self { colour, kind }
    }

    /// Two-letter code such as `wB` or `ba`
    pub fn code(&self) -> String {
        format!("{}{}", self.colour.code(), self.kind.code())
    }

    /// Parse a two-letter piece code such as `wB` or `ba`
    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let colour = Colour::from_code(chars.next()?)?;
        let kind = Kind::from_code(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Piece::new(colour, kind))
    }
}
