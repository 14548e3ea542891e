//! # grid_dijkstra
//!
//! Shortest paths on small editable grids. A [Graph] holds a rectangular matrix of cells
//! (empty, wall, start, goal or path marker) that is edited through commands such as
//! [Graph::make_wall] and [Graph::place_start]. Every edit rebuilds a 4-connected adjacency list
//! over the non-wall cells, and [Graph::shortest_path] runs
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) over it with unit
//! edge costs, marking the cells of the found path for rendering. Connected components are kept
//! in a [UnionFind](petgraph::unionfind::UnionFind) so unreachable goals are reported without
//! searching.
//!
//! ```
//! use grid_dijkstra::{Category, Graph, Point, ValueGrid};
//!
//! let mut graph = Graph::new(5, 5, Category::Empty);
//! graph.place_start(Point::new(0, 0)).unwrap();
//! graph.place_goal(Point::new(4, 0)).unwrap();
//! graph.make_wall(Point::new(1, 0), Point::new(1, 3)).unwrap();
//! assert_eq!(graph.shortest_path(), Ok(Some(12)));
//! ```
pub mod adjacency;
pub mod cell;
mod error;
pub mod graph;
pub mod solver;

pub use cell::{Category, Node};
pub use error::{GridError, GridResult};
pub use graph::Graph;
pub use grid_util::{Point, ValueGrid};

/// Grid size of [Graph::default] and of the interactive editor.
pub const DEFAULT_WIDTH: usize = 5;
pub const DEFAULT_HEIGHT: usize = 5;
/// Inline capacity of a neighbour list; a cell has at most four open neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
