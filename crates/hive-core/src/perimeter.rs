//! The boundary graph that crawling pieces travel along.
//!
//! Every empty cell that touches the hive, can be reached from outside, and
//! has at least one legal slide becomes a node. A node's `left` set holds the
//! cells one slide away with the hive on the mover's left; `right` holds the
//! cells with the hive on the right. Around a simple outline each set has one
//! member and the two directions trace the outline in opposite senses. Where
//! one empty cell bridges two separate clusters the sets grow to two members.
//!
//! Cells inside an enclosed cavity are left out even if pieces could slide
//! between them, since nothing can get in or out.
//!
//! A cluster with a piece buried on all six sides is locked solid: no
//! outline that touches it is traced. A hollow ring is not locked, so its
//! outer outline stays.

use crate::board::Board;
use crate::connectivity::components;
use crate::hex::HexCoord;
use crate::slide::Slide;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Neighbouring boundary cells of one perimeter node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerimeterNode {
    /// Cells reached with the hive on the left
    pub left: HashSet<HexCoord>,
    /// Cells reached with the hive on the right
    pub right: HashSet<HexCoord>,
}

impl PerimeterNode {
    /// Every cell one slide away, in either sense
    pub fn steps(&self) -> impl Iterator<Item = HexCoord> + '_ {
        self.left.union(&self.right).copied()
    }
}

/// Boundary graph of a board, see [`Board::crawl_boundary`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerimeterGraph {
    nodes: HashMap<HexCoord, PerimeterNode>,
}

impl PerimeterGraph {
    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node at `coord`, if it is one
    pub fn get(&self, coord: HexCoord) -> Option<&PerimeterNode> {
        self.nodes.get(&coord)
    }

    /// Whether `coord` is a node
    pub fn contains(&self, coord: HexCoord) -> bool {
        self.nodes.contains_key(&coord)
    }

    /// Every node with its coordinate, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (HexCoord, &PerimeterNode)> {
        self.nodes.iter().map(|(coord, node)| (*coord, node))
    }

    /// All node coordinates
    pub fn coords(&self) -> HashSet<HexCoord> {
        self.nodes.keys().copied().collect()
    }

    /// Cells one slide away from `coord`; empty if `coord` is not a node
    pub fn steps(&self, coord: HexCoord) -> Vec<HexCoord> {
        self.nodes
            .get(&coord)
            .map(|node| node.steps().collect())
            .unwrap_or_default()
    }

    /// Every node reachable from `start` by any number of slides, `start`
    /// included. Empty if `start` is not a node.
    pub fn reachable_from(&self, start: HexCoord) -> HashSet<HexCoord> {
        let mut reached = HashSet::new();
        if !self.contains(start) {
            return reached;
        }
        reached.insert(start);
        let mut queue = vec![start];
        while let Some(cell) = queue.pop() {
            for next in self.steps(cell) {
                if reached.insert(next) {
                    queue.push(next);
                }
            }
        }
        reached
    }

    /// Split the graph into its independent boundary components
    pub fn components(&self) -> Vec<HashSet<HexCoord>> {
        let mut assigned: HashSet<HexCoord> = HashSet::with_capacity(self.len());
        let mut result = Vec::new();
        for &start in self.nodes.keys() {
            if assigned.contains(&start) {
                continue;
            }
            let component = self.reachable_from(start);
            assigned.extend(component.iter().copied());
            result.push(component);
        }
        result
    }

    /// Convert to a JSON-friendly list sorted by coordinate
    pub fn to_json_friendly(&self) -> Vec<PerimeterNodeJson> {
        let sorted = |set: &HashSet<HexCoord>| {
            let mut cells: Vec<HexCoord> = set.iter().copied().collect();
            cells.sort();
            cells
        };
        let mut nodes: Vec<PerimeterNodeJson> = self
            .iter()
            .map(|(coord, node)| PerimeterNodeJson {
                coord,
                left: sorted(&node.left),
                right: sorted(&node.right),
            })
            .collect();
        nodes.sort_by_key(|n| n.coord);
        nodes
    }
}

/// JSON-friendly perimeter node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerimeterNodeJson {
    pub coord: HexCoord,
    pub left: Vec<HexCoord>,
    pub right: Vec<HexCoord>,
}

/// Axis-aligned box in axial coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    min_q: i32,
    max_q: i32,
    min_r: i32,
    max_r: i32,
}

impl Bounds {
    fn around<'a>(cells: impl Iterator<Item = &'a HexCoord>) -> Option<Self> {
        cells.fold(None, |bounds, c| {
            Some(match bounds {
                None => Bounds {
                    min_q: c.q,
                    max_q: c.q,
                    min_r: c.r,
                    max_r: c.r,
                },
                Some(b) => Bounds {
                    min_q: b.min_q.min(c.q),
                    max_q: b.max_q.max(c.q),
                    min_r: b.min_r.min(c.r),
                    max_r: b.max_r.max(c.r),
                },
            })
        })
    }

    fn grown(self, margin: i32) -> Self {
        Bounds {
            min_q: self.min_q - margin,
            max_q: self.max_q + margin,
            min_r: self.min_r - margin,
            max_r: self.max_r + margin,
        }
    }

    fn contains(&self, c: HexCoord) -> bool {
        (self.min_q..=self.max_q).contains(&c.q) && (self.min_r..=self.max_r).contains(&c.r)
    }

    /// Cells on the edge of the box
    fn border(self) -> impl Iterator<Item = HexCoord> {
        let rows = (self.min_r..=self.max_r).flat_map(move |r| {
            [HexCoord::new(self.min_q, r), HexCoord::new(self.max_q, r)]
        });
        let columns = (self.min_q + 1..self.max_q).flat_map(move |q| {
            [HexCoord::new(q, self.min_r), HexCoord::new(q, self.max_r)]
        });
        rows.chain(columns)
    }
}

/// Frontier cells that some cluster walls off from the open grid.
///
/// A sealed region is always ringed by a single cluster, so each cluster is
/// flooded on its own, inside its own bounding box grown by one cell. Other
/// clusters are passable here.
fn sealed_cells(clusters: &[HashSet<HexCoord>], frontier: &HashSet<HexCoord>) -> HashSet<HexCoord> {
    let mut sealed = HashSet::new();
    for cluster in clusters {
        let Some(bounds) = Bounds::around(cluster.iter()) else {
            continue;
        };
        let area = bounds.grown(1);
        let mut outside: HashSet<HexCoord> = area.border().collect();
        let mut queue: Vec<HexCoord> = outside.iter().copied().collect();
        while let Some(cell) = queue.pop() {
            for next in cell.neighbors() {
                if area.contains(next) && !cluster.contains(&next) && outside.insert(next) {
                    queue.push(next);
                }
            }
        }
        sealed.extend(
            frontier
                .iter()
                .filter(|c| area.contains(**c) && !outside.contains(*c))
                .copied(),
        );
    }
    sealed
}

/// Whether some piece of the cluster has all six neighbours occupied
fn is_locked(cluster: &HashSet<HexCoord>) -> bool {
    cluster
        .iter()
        .any(|cell| cell.neighbors().iter().all(|n| cluster.contains(n)))
}

impl Board {
    /// Trace the boundary of the hive into a [`PerimeterGraph`]
    pub fn crawl_boundary(&self) -> PerimeterGraph {
        let occupied: HashSet<HexCoord> = self.occupied().collect();
        let clusters = components(&occupied);
        let frontier = self.frontier();
        let sealed = sealed_cells(&clusters, &frontier);

        let mut nodes = HashMap::new();
        for &cell in frontier.difference(&sealed) {
            let mut node = PerimeterNode::default();
            for (neighbor, slide) in cell.neighbors().into_iter().zip(self.slides(cell)) {
                match slide {
                    Slide::Left => {
                        node.left.insert(neighbor);
                    }
                    Slide::Right => {
                        node.right.insert(neighbor);
                    }
                    Slide::Occupied | Slide::Gated | Slide::Detached => {}
                }
            }
            // A cell with any slide has one in each sense.
            if !node.left.is_empty() && !node.right.is_empty() {
                nodes.insert(cell, node);
            }
        }
        let mut graph = PerimeterGraph { nodes };

        let locked: HashSet<HexCoord> = clusters
            .into_iter()
            .filter(is_locked)
            .flatten()
            .collect();
        if !locked.is_empty() {
            for outline in graph.components() {
                let touches_locked = outline
                    .iter()
                    .any(|cell| cell.neighbors().iter().any(|n| locked.contains(n)));
                if touches_locked {
                    graph.nodes.retain(|coord, _| !outline.contains(coord));
                }
            }
        }

        debug!(
            pieces = self.len(),
            locked = locked.len(),
            nodes = graph.len(),
            "perimeter crawled"
        );
        graph
    }
}
