//! Destination generators for each way of moving.
//!
//! Crawling moves are evaluated with the mover lifted off the board: a piece
//! cannot slide along itself, and the cell it leaves becomes part of the
//! boundary it travels on. None of the generators check whether lifting the
//! piece splits the hive; callers combine them with
//! [`Board::move_sources`] for that.

use crate::board::Board;
use crate::hex::{HexCoord, DIRECTIONS};
use crate::perimeter::PerimeterGraph;
use crate::piece::Kind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Number of slides a spider makes
const SPIDER_STEPS: usize = 3;

/// How a kind of piece moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    /// A single slide (queen, and beetle at ground level)
    Step,
    /// Exactly three slides without doubling back (spider)
    Crawl3,
    /// Any number of slides (ant)
    Crawl,
    /// Straight jump over a line of pieces (grasshopper)
    Jump,
}

impl Board {
    /// Destinations for a piece of `kind` standing at `from`
    pub fn moves(&self, kind: Kind, from: HexCoord) -> HashSet<HexCoord> {
        let destinations = match kind.movement() {
            Movement::Step => self.bee_moves(from),
            Movement::Crawl3 => self.spider_moves(from),
            Movement::Crawl => self.ant_moves(from),
            Movement::Jump => self.hopper_moves(from),
        };
        debug!(?kind, ?from, count = destinations.len(), "moves generated");
        destinations
    }

    /// Destinations for whatever piece stands at `from`; empty if none does
    pub fn moves_from(&self, from: HexCoord) -> HashSet<HexCoord> {
        match self.piece_at(from) {
            Some(piece) => self.moves(piece.kind, from),
            None => HashSet::new(),
        }
    }

    /// One slide in any direction, still touching another piece
    pub fn bee_moves(&self, from: HexCoord) -> HashSet<HexCoord> {
        if !self.is_occupied(from) {
            return HashSet::new();
        }
        let lifted = self.lifted(from);
        lifted.slide_targets(from).into_iter().collect()
    }

    /// Exactly three slides along the boundary, never revisiting a cell
    pub fn spider_moves(&self, from: HexCoord) -> HashSet<HexCoord> {
        let Some(graph) = self.boundary_without(from) else {
            return HashSet::new();
        };
        let mut destinations = HashSet::new();
        let mut path = vec![from];
        walk_exact(&graph, &mut path, SPIDER_STEPS, &mut destinations);
        destinations
    }

    /// Anywhere along the boundary reachable from `from`
    pub fn ant_moves(&self, from: HexCoord) -> HashSet<HexCoord> {
        let Some(graph) = self.boundary_without(from) else {
            return HashSet::new();
        };
        let mut destinations = graph.reachable_from(from);
        destinations.remove(&from);
        destinations
    }

    /// Jump over each adjacent straight line of pieces to the first gap
    pub fn hopper_moves(&self, from: HexCoord) -> HashSet<HexCoord> {
        if !self.is_occupied(from) {
            return HashSet::new();
        }
        DIRECTIONS
            .iter()
            .filter_map(|&direction| {
                let mut landing = from + direction;
                if !self.is_occupied(landing) {
                    return None;
                }
                while self.is_occupied(landing) {
                    landing = landing + direction;
                }
                Some(landing)
            })
            .collect()
    }

    /// Boundary graph seen by the piece at `from` once it is picked up
    fn boundary_without(&self, from: HexCoord) -> Option<PerimeterGraph> {
        if !self.is_occupied(from) {
            return None;
        }
        Some(self.lifted(from).crawl_boundary())
    }
}

/// Collect the end of every simple path of `remaining` further steps
fn walk_exact(
    graph: &PerimeterGraph,
    path: &mut Vec<HexCoord>,
    remaining: usize,
    destinations: &mut HashSet<HexCoord>,
) {
    let Some(&here) = path.last() else { return };
    if remaining == 0 {
        destinations.insert(here);
        return;
    }
    for next in graph.steps(here) {
        if path.contains(&next) {
            continue;
        }
        path.push(next);
        walk_exact(graph, path, remaining - 1, destinations);
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Colour, Piece};

    const EAST: HexCoord = DIRECTIONS[0];

    fn board(pieces: &[(HexCoord, Kind)]) -> Board {
        pieces
            .iter()
            .map(|&(c, kind)| (c, Piece::new(Colour::White, kind)))
            .collect()
    }

    #[test]
    fn test_bee_at_end_of_line() {
        let board = board(&[
            (HexCoord::CENTRE, Kind::Queen),
            (EAST, Kind::Ant),
            (EAST * 2, Kind::Ant),
        ]);
        assert_eq!(
            board.bee_moves(HexCoord::CENTRE),
            HashSet::from([DIRECTIONS[1], DIRECTIONS[5]])
        );
    }

    #[test]
    fn test_bee_cannot_squeeze_through_gate() {
        let board = board(&[
            (HexCoord::CENTRE, Kind::Queen),
            (DIRECTIONS[0], Kind::Ant),
            (DIRECTIONS[2], Kind::Ant),
            (DIRECTIONS[4], Kind::Ant),
        ]);
        assert!(board.bee_moves(HexCoord::CENTRE).is_empty());
    }

    #[test]
    fn test_lone_piece_has_nowhere_to_crawl() {
        let board = board(&[(HexCoord::CENTRE, Kind::Ant)]);
        assert!(board.bee_moves(HexCoord::CENTRE).is_empty());
        assert!(board.spider_moves(HexCoord::CENTRE).is_empty());
        assert!(board.ant_moves(HexCoord::CENTRE).is_empty());
        assert!(board.hopper_moves(HexCoord::CENTRE).is_empty());
    }

    #[test]
    fn test_empty_origin_yields_nothing() {
        let board = board(&[(EAST, Kind::Ant)]);
        for kind in Kind::ALL {
            assert!(board.moves(kind, HexCoord::CENTRE).is_empty(), "{:?}", kind);
        }
        assert!(board.moves_from(HexCoord::CENTRE).is_empty());
    }

    #[test]
    fn test_spider_around_single_piece() {
        let board = board(&[(HexCoord::CENTRE, Kind::Spider), (EAST, Kind::Ant)]);
        assert_eq!(board.spider_moves(HexCoord::CENTRE), HashSet::from([EAST * 2]));
    }

    #[test]
    fn test_ant_circles_single_piece() {
        let board = board(&[(HexCoord::CENTRE, Kind::Ant), (EAST, Kind::Queen)]);
        let expected: HashSet<HexCoord> = EAST
            .neighbors()
            .into_iter()
            .filter(|c| *c != HexCoord::CENTRE)
            .collect();
        assert_eq!(board.ant_moves(HexCoord::CENTRE), expected);
    }

    #[test]
    fn test_hopper_clears_whole_line() {
        let board = board(&[
            (HexCoord::CENTRE, Kind::Grasshopper),
            (EAST, Kind::Ant),
            (EAST * 2, Kind::Ant),
            (EAST * 3, Kind::Ant),
        ]);
        assert_eq!(board.hopper_moves(HexCoord::CENTRE), HashSet::from([EAST * 4]));
    }

    #[test]
    fn test_dispatch_by_kind() {
        let board = board(&[
            (HexCoord::CENTRE, Kind::Grasshopper),
            (EAST, Kind::Queen),
            (EAST * 2, Kind::Beetle),
        ]);
        assert_eq!(board.moves_from(HexCoord::CENTRE), board.hopper_moves(HexCoord::CENTRE));
        assert_eq!(board.moves(Kind::Beetle, EAST * 2), board.bee_moves(EAST * 2));
        assert_eq!(board.moves_from(EAST), board.bee_moves(EAST));
    }
}
