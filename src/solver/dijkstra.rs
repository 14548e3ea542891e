use itertools::Itertools;

use crate::adjacency::AdjacencyList;
use crate::cell::Node;
use crate::solver::{GridSolver, SearchState, UNREACHED};

/// Dijkstra with a linear scan for the closest unvisited node, O(V²). On ties the node seen
/// first in the unvisited set wins, which is ascending index order.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn solve(&self, adjacency: &AdjacencyList, nodes: &[Node], start: usize) -> SearchState {
        let mut state = SearchState::new(adjacency.len(), start);
        let mut unvisited = nodes.iter().map(|n| n.index).collect::<Vec<usize>>();
        loop {
            let Some(position) = unvisited
                .iter()
                .position_min_by_key(|&&ix| state.distance[ix])
            else {
                break;
            };
            let current = unvisited.remove(position);
            // Everything left is unreachable
            if state.distance[current] == UNREACHED {
                break;
            }
            for neighbour in adjacency.neighbours(current) {
                state.relax(current, neighbour.index);
            }
        }
        state
    }
}
