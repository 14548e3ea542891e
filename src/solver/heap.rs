use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::adjacency::AdjacencyList;
use crate::cell::Node;
use crate::solver::{GridSolver, SearchState};

struct SmallestCostHolder {
    cost: usize,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.index == other.index
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest cost, lowest index first on ties
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

/// Dijkstra driven by a [BinaryHeap], O((V + E) log V). Produces the same distances as
/// [DijkstraSolver](crate::solver::dijkstra::DijkstraSolver); with equal edge costs the chosen
/// path may differ.
#[derive(Clone, Debug, Default)]
pub struct HeapSolver;

impl GridSolver for HeapSolver {
    fn solve(&self, adjacency: &AdjacencyList, _nodes: &[Node], start: usize) -> SearchState {
        let mut state = SearchState::new(adjacency.len(), start);
        let mut to_see = BinaryHeap::new();
        if state.is_reached(start) {
            to_see.push(SmallestCostHolder {
                cost: 0,
                index: start,
            });
        }
        while let Some(SmallestCostHolder { cost, index }) = to_see.pop() {
            // A node may sit in the heap several times if a shorter way to it was found later.
            // Only the entry matching its current distance is expanded.
            if cost > state.distance[index] {
                continue;
            }
            for neighbour in adjacency.neighbours(index) {
                if state.relax(index, neighbour.index) {
                    to_see.push(SmallestCostHolder {
                        cost: state.distance[neighbour.index],
                        index: neighbour.index,
                    });
                }
            }
        }
        state
    }
}
