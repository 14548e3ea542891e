use crate::adjacency::AdjacencyList;
use crate::cell::Node;
use log::info;

pub mod dijkstra;
pub mod heap;

/// Distance of every node the search has not reached. Larger than any real hop count.
pub const UNREACHED: usize = usize::MAX;

/// Per-search bookkeeping, indexed by linear cell index. A fresh state is created for every
/// search and dropped once the path has been read out of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub distance: Vec<usize>,
    pub predecessor: Vec<Option<usize>>,
}

impl SearchState {
    /// Every slot starts out [UNREACHED] except `start`, which is at distance 0.
    pub fn new(size: usize, start: usize) -> SearchState {
        let mut distance = vec![UNREACHED; size];
        if let Some(d) = distance.get_mut(start) {
            *d = 0;
        }
        SearchState {
            distance,
            predecessor: vec![None; size],
        }
    }

    pub fn is_reached(&self, index: usize) -> bool {
        self.distance_to(index).is_some()
    }

    pub fn distance_to(&self, index: usize) -> Option<usize> {
        self.distance
            .get(index)
            .copied()
            .filter(|&d| d != UNREACHED)
    }

    /// Offers `to` a path through `from` with unit cost. Returns whether `to` improved.
    pub fn relax(&mut self, from: usize, to: usize) -> bool {
        let Some(candidate) = self.distance_to(from).map(|d| d + 1) else {
            return false;
        };
        if candidate < self.distance[to] {
            self.distance[to] = candidate;
            self.predecessor[to] = Some(from);
            true
        } else {
            false
        }
    }

    /// Follows predecessors back from `goal`. The returned path runs from the start to `goal`
    /// inclusive.
    pub fn path_to(&self, goal: usize) -> Option<Vec<usize>> {
        if !self.is_reached(goal) {
            return None;
        }
        let mut path = std::iter::successors(Some(goal), |&ix| self.predecessor[ix])
            .collect::<Vec<usize>>();
        path.reverse();
        Some(path)
    }
}

/// A single-source search over unit-cost adjacency lists.
pub trait GridSolver {
    /// Runs the search from `start` over the given nodes until nothing more can be reached.
    fn solve(&self, adjacency: &AdjacencyList, nodes: &[Node], start: usize) -> SearchState;

    /// Hop count from `start` to `goal` together with the node indices of one shortest path,
    /// or [None] if the goal cannot be reached.
    fn shortest_path(
        &self,
        adjacency: &AdjacencyList,
        nodes: &[Node],
        start: usize,
        goal: usize,
    ) -> Option<(usize, Vec<usize>)> {
        let state = self.solve(adjacency, nodes, start);
        match state.distance_to(goal) {
            Some(distance) => state.path_to(goal).map(|path| (distance, path)),
            None => {
                info!("Search from {} exhausted without reaching {}", start, goal);
                None
            }
        }
    }
}
