//! Turns the cell matrix into the adjacency list the solvers walk. The list is always rebuilt
//! from scratch; nothing in here patches an existing list.
use grid_util::{SimpleValueGrid, ValueGrid};
use itertools::iproduct;
use smallvec::SmallVec;

use crate::cell::{Category, Node};
use crate::N_SMALLVEC_SIZE;

/// Offsets of the 4-neighbourhood in the order up, down, left, right. Rows grow downwards.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

pub type Neighbours = SmallVec<[Node; N_SMALLVEC_SIZE]>;

/// Row-major index of the cell in column `x` of row `y`.
pub fn linear_index(width: usize, x: i32, y: i32) -> usize {
    y as usize * width + x as usize
}

pub fn in_bounds(width: usize, height: usize, x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height
}

/// One slot per cell, indexed by [linear_index]. Wall slots are always empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    entries: Vec<Neighbours>,
}

impl AdjacencyList {
    /// Number of slots, i.e. the cell count of the grid this list was built from.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Neighbours of the given index, empty for walls and unknown indices.
    pub fn neighbours(&self, index: usize) -> &[Node] {
        self.entries
            .get(index)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    /// Counts directed entries, so every open edge is counted twice.
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|n| n.len()).sum()
    }

    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.neighbours(from).iter().any(|n| n.index == to)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Node])> {
        self.entries.iter().map(|n| n.as_slice()).enumerate()
    }
}

/// Everything a rebuild produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphBuild {
    /// Non-wall cells in ascending index order.
    pub nodes: Vec<Node>,
    pub adjacency: AdjacencyList,
    pub start: Option<usize>,
    pub goal: Option<usize>,
}

/// Builds nodes and adjacency for a cell matrix in row-major order. If several cells carry the
/// start (or goal) category, the last one in row-major order is the one recorded.
pub fn build(cells: &SimpleValueGrid<Category>) -> GraphBuild {
    let width = cells.width();
    let height = cells.height();
    let mut result = GraphBuild {
        nodes: Vec::with_capacity(width * height),
        adjacency: AdjacencyList {
            entries: vec![Neighbours::new(); width * height],
        },
        start: None,
        goal: None,
    };
    for (y, x) in iproduct!(0..height as i32, 0..width as i32) {
        let category = cells.get(x, y);
        if category.is_wall() {
            continue;
        }
        let index = linear_index(width, x, y);
        result.nodes.push(Node::new(index, category));
        match category {
            Category::Start => result.start = Some(index),
            Category::Goal => result.goal = Some(index),
            _ => {}
        }
        let entry = &mut result.adjacency.entries[index];
        for (dx, dy) in NEUMANN_OFFSETS {
            let (nx, ny) = (x + dx, y + dy);
            if !in_bounds(width, height, nx, ny) {
                continue;
            }
            let neighbour = cells.get(nx, ny);
            if !neighbour.is_wall() {
                entry.push(Node::new(linear_index(width, nx, ny), neighbour));
            }
        }
    }
    result
}
