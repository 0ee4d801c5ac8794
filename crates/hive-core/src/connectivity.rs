//! One-hive rule: which pieces can be picked up without splitting the hive.
//!
//! A piece may leave its cell only if it is not a cut vertex (articulation
//! point) of the adjacency graph over occupied cells. Cut vertices are found
//! with the usual discovery/low-link depth-first search, run over every
//! connected component. The search keeps its own stack so long chains of
//! pieces cannot overflow the call stack.

use crate::board::Board;
use crate::hex::HexCoord;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// One level of the explicit DFS stack
#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: HexCoord,
    parent: Option<HexCoord>,
    /// Next direction index to explore from `cell`
    next: usize,
}

/// Cut vertices of the graph induced on `cells` by hex adjacency.
pub fn cut_vertices(cells: &HashSet<HexCoord>) -> HashSet<HexCoord> {
    let mut discovery: HashMap<HexCoord, usize> = HashMap::with_capacity(cells.len());
    let mut low: HashMap<HexCoord, usize> = HashMap::with_capacity(cells.len());
    let mut cuts = HashSet::new();
    let mut counter = 0;

    for &root in cells {
        if discovery.contains_key(&root) {
            continue;
        }
        discovery.insert(root, counter);
        low.insert(root, counter);
        counter += 1;

        let mut root_children = 0;
        let mut stack = vec![Frame {
            cell: root,
            parent: None,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Frame { cell, parent, next } = *frame;

            if next == 6 {
                // All neighbours explored: fold our low-link into the parent.
                stack.pop();
                let Some(parent) = parent else { continue };
                let child_low = low[&cell];
                if let Some(parent_low) = low.get_mut(&parent) {
                    *parent_low = (*parent_low).min(child_low);
                }
                if parent != root && child_low >= discovery[&parent] {
                    cuts.insert(parent);
                }
                continue;
            }

            frame.next += 1;
            let neighbor = cell.neighbor(next);
            if !cells.contains(&neighbor) || Some(neighbor) == parent {
                continue;
            }

            match discovery.get(&neighbor) {
                Some(&seen) => {
                    // Back edge
                    if let Some(cell_low) = low.get_mut(&cell) {
                        *cell_low = (*cell_low).min(seen);
                    }
                }
                None => {
                    discovery.insert(neighbor, counter);
                    low.insert(neighbor, counter);
                    counter += 1;
                    if cell == root {
                        root_children += 1;
                    }
                    stack.push(Frame {
                        cell: neighbor,
                        parent: Some(cell),
                        next: 0,
                    });
                }
            }
        }

        if root_children > 1 {
            cuts.insert(root);
        }
    }

    trace!(cells = cells.len(), cuts = cuts.len(), "cut vertices computed");
    cuts
}

/// Connected components of `cells` under hex adjacency
pub fn components(cells: &HashSet<HexCoord>) -> Vec<HashSet<HexCoord>> {
    let mut seen: HashSet<HexCoord> = HashSet::with_capacity(cells.len());
    let mut result = Vec::new();

    for &start in cells {
        if !seen.insert(start) {
            continue;
        }
        let mut component = HashSet::new();
        let mut queue = vec![start];
        while let Some(cell) = queue.pop() {
            component.insert(cell);
            for neighbor in cell.neighbors() {
                if cells.contains(&neighbor) && seen.insert(neighbor) {
                    queue.push(neighbor);
                }
            }
        }
        result.push(component);
    }
    result
}

impl Board {
    /// Pieces that can be lifted without splitting their part of the hive
    pub fn move_sources(&self) -> HashSet<HexCoord> {
        let occupied: HashSet<HexCoord> = self.occupied().collect();
        let cuts = cut_vertices(&occupied);
        let sources: HashSet<HexCoord> = occupied.difference(&cuts).copied().collect();
        debug!(pieces = occupied.len(), sources = sources.len(), "move sources");
        sources
    }

    /// Pieces pinned in place by the one-hive rule
    pub fn pinned(&self) -> HashSet<HexCoord> {
        let occupied: HashSet<HexCoord> = self.occupied().collect();
        cut_vertices(&occupied)
    }

    /// Whether all pieces form a single connected hive
    pub fn is_connected(&self) -> bool {
        let occupied: HashSet<HexCoord> = self.occupied().collect();
        components(&occupied).len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::DIRECTIONS;

    fn cells(coords: impl IntoIterator<Item = HexCoord>) -> HashSet<HexCoord> {
        coords.into_iter().collect()
    }

    fn line(length: i32) -> HashSet<HexCoord> {
        cells((0..length).map(|i| DIRECTIONS[0] * i))
    }

    #[test]
    fn test_empty_has_no_cuts() {
        assert!(cut_vertices(&HashSet::new()).is_empty());
    }

    #[test]
    fn test_line_interior_is_cut() {
        let line = line(5);
        let expected = cells((1..4).map(|i| DIRECTIONS[0] * i));
        assert_eq!(cut_vertices(&line), expected);
    }

    #[test]
    fn test_ring_has_no_cuts() {
        let ring = cells(DIRECTIONS);
        assert!(cut_vertices(&ring).is_empty());
    }

    #[test]
    fn test_triangle_has_no_cuts() {
        let triangle = cells([HexCoord::CENTRE, DIRECTIONS[0], DIRECTIONS[1]]);
        assert!(cut_vertices(&triangle).is_empty());
    }

    #[test]
    fn test_star_centre_is_cut() {
        let mut star = cells([HexCoord::CENTRE]);
        for d in [0, 2, 4] {
            star.insert(DIRECTIONS[d]);
        }
        assert_eq!(cut_vertices(&star), cells([HexCoord::CENTRE]));
    }

    #[test]
    fn test_each_component_analysed() {
        let mut two_lines = line(3);
        for i in 0..3 {
            two_lines.insert(HexCoord::new(10, 10) + DIRECTIONS[0] * i);
        }
        assert_eq!(
            cut_vertices(&two_lines),
            cells([DIRECTIONS[0], HexCoord::new(11, 10)])
        );
        assert_eq!(components(&two_lines).len(), 2);
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let chain = line(20_000);
        assert_eq!(cut_vertices(&chain).len(), 19_998);
    }
}
