use core::fmt;
use grid_util::{Point, SimpleValueGrid, ValueGrid};
use itertools::{iproduct, Itertools};
use log::{debug, info, warn};
use petgraph::unionfind::UnionFind;

use crate::adjacency::{self, in_bounds, linear_index, AdjacencyList};
use crate::cell::{Category, Node};
use crate::error::{GridError, GridResult};
use crate::solver::{dijkstra::DijkstraSolver, GridSolver};
use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// [Graph] owns the cell matrix together with everything derived from it: the node set, the
/// adjacency list, the start and goal indices and a [UnionFind] of connected components. Every
/// edit rebuilds the derived state from scratch, so it always matches the cells.
/// Implements [ValueGrid] over [Category].
#[derive(Clone, Debug)]
pub struct Graph {
    cells: SimpleValueGrid<Category>,
    nodes: Vec<Node>,
    adjacency: AdjacencyList,
    start: Option<usize>,
    goal: Option<usize>,
    pub components: UnionFind<usize>,
    /// Answer unreachable queries from the components without running a search.
    pub use_components: bool,
}

impl Default for Graph {
    fn default() -> Graph {
        Graph::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, Category::Empty)
    }
}

impl Graph {
    /// Non-wall cells as of the last rebuild, in ascending index order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }
    pub fn start(&self) -> Option<usize> {
        self.start
    }
    pub fn goal(&self) -> Option<usize> {
        self.goal
    }

    pub fn contains(&self, point: &Point) -> bool {
        in_bounds(self.width(), self.height(), point.x, point.y)
    }

    pub fn index_of(&self, point: &Point) -> GridResult<usize> {
        if self.contains(point) {
            Ok(linear_index(self.width(), point.x, point.y))
        } else {
            Err(GridError::OutOfBounds {
                point: *point,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    pub fn point_of(&self, index: usize) -> Point {
        let width = self.width();
        Point::new((index % width) as i32, (index / width) as i32)
    }

    fn edit_index(&self, point: &Point) -> GridResult<usize> {
        self.index_of(point).map_err(|e| {
            warn!("Ignoring edit: {}", e);
            e
        })
    }

    /// Recomputes nodes, adjacency, start, goal and components from the cells.
    pub fn rebuild(&mut self) {
        let build = adjacency::build(&self.cells);
        self.nodes = build.nodes;
        self.adjacency = build.adjacency;
        self.start = build.start;
        self.goal = build.goal;
        self.generate_components();
        debug!(
            "Rebuilt graph with {} nodes and {} edges",
            self.nodes.len(),
            self.adjacency.edge_count() / 2
        );
    }

    /// Generates a new [UnionFind] structure and links up adjacent nodes to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.adjacency.len());
        for (ix, neighbours) in self.adjacency.iter() {
            for n in neighbours {
                self.components.union(ix, n.index);
            }
        }
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.index_of(point)
            .ok()
            .map(|ix| self.components.find(ix))
    }

    /// Checks if both points are open cells on the same connected component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.index_of(start), self.index_of(goal)) {
            (Ok(start_ix), Ok(goal_ix)) => {
                !self.get(start.x, start.y).is_wall()
                    && !self.get(goal.x, goal.y).is_wall()
                    && self.components.equiv(start_ix, goal_ix)
            }
            _ => false,
        }
    }

    pub fn make_wall_block(&mut self, point: Point) -> GridResult<()> {
        self.edit_index(&point)?;
        self.erase_path();
        self.cells.set(point.x, point.y, Category::Wall);
        self.rebuild();
        Ok(())
    }

    /// Walls off every cell on the straight line between `from` and `to`, in either order.
    pub fn make_wall(&mut self, from: Point, to: Point) -> GridResult<()> {
        self.edit_index(&from)?;
        self.edit_index(&to)?;
        if from.x != to.x && from.y != to.y {
            warn!("Wall from {} to {} is not a straight line, ignoring it", from, to);
            return Err(GridError::NotColinear(from, to));
        }
        self.erase_path();
        for (x, y) in iproduct!(
            from.x.min(to.x)..=from.x.max(to.x),
            from.y.min(to.y)..=from.y.max(to.y)
        ) {
            self.cells.set(x, y, Category::Wall);
        }
        self.rebuild();
        Ok(())
    }

    /// Moves the start to `point`, clearing the previous start cell.
    pub fn place_start(&mut self, point: Point) -> GridResult<()> {
        self.place_endpoint(point, Category::Start)
    }

    /// Moves the goal to `point`, clearing the previous goal cell.
    pub fn place_goal(&mut self, point: Point) -> GridResult<()> {
        self.place_endpoint(point, Category::Goal)
    }

    fn place_endpoint(&mut self, point: Point, category: Category) -> GridResult<()> {
        let index = self.edit_index(&point)?;
        self.erase_path();
        let previous = if category == Category::Start {
            self.start
        } else {
            self.goal
        };
        if let Some(previous) = previous.filter(|&p| p != index) {
            let p = self.point_of(previous);
            self.cells.set(p.x, p.y, Category::Empty);
        }
        self.cells.set(point.x, point.y, category);
        self.rebuild();
        Ok(())
    }

    /// Resets every cell to [Category::Empty].
    pub fn clear(&mut self) {
        self.cells = SimpleValueGrid::new(self.width(), self.height(), Category::Empty);
        self.rebuild();
    }

    /// Removes the markers left by the previous search. Every edit and every search does this
    /// first, so a rendered path never runs through cells edited after it was found.
    pub fn clear_path(&mut self) {
        if self.erase_path() {
            self.rebuild();
        }
    }

    /// Resets path cells to [Category::Empty] without rebuilding. Returns whether any were set.
    fn erase_path(&mut self) -> bool {
        let marked = self
            .nodes
            .iter()
            .filter(|n| n.category == Category::Path)
            .map(|n| self.point_of(n.index))
            .collect::<Vec<Point>>();
        for p in &marked {
            self.cells.set(p.x, p.y, Category::Empty);
        }
        !marked.is_empty()
    }

    /// Length of the shortest path from start to goal using [DijkstraSolver], marking the
    /// cells in between as [Category::Path]. `Ok(None)` means the goal is unreachable.
    pub fn shortest_path(&mut self) -> GridResult<Option<usize>> {
        self.shortest_path_with(&DijkstraSolver)
    }

    pub fn shortest_path_with<S: GridSolver>(&mut self, solver: &S) -> GridResult<Option<usize>> {
        Ok(self.find_path_with(solver)?.map(|(distance, _)| distance))
    }

    /// Like [shortest_path_with](Self::shortest_path_with), but also returns the path itself
    /// from start to goal inclusive.
    pub fn find_path_with<S: GridSolver>(
        &mut self,
        solver: &S,
    ) -> GridResult<Option<(usize, Vec<Point>)>> {
        let start = self.start.ok_or(GridError::MissingStart)?;
        let goal = self.goal.ok_or(GridError::MissingGoal)?;
        self.clear_path();
        if self.use_components && !self.components.equiv(start, goal) {
            info!(
                "{} is not reachable from {}",
                self.point_of(goal),
                self.point_of(start)
            );
            return Ok(None);
        }
        let Some((distance, path)) =
            solver.shortest_path(&self.adjacency, &self.nodes, start, goal)
        else {
            return Ok(None);
        };
        for &ix in path.iter().filter(|&&ix| ix != start && ix != goal) {
            let p = self.point_of(ix);
            self.cells.set(p.x, p.y, Category::Path);
        }
        self.rebuild();
        info!(
            "Shortest path from {} to {} takes {} steps",
            self.point_of(start),
            self.point_of(goal),
            distance
        );
        let points = path.into_iter().map(|ix| self.point_of(ix)).collect();
        Ok(Some((distance, points)))
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let row = (0..self.width() as i32)
                .map(|x| self.cells.get(x, y))
                .join(" ");
            writeln!(f, "[{}]", row)?;
        }
        Ok(())
    }
}

impl ValueGrid<Category> for Graph {
    fn new(width: usize, height: usize, default_value: Category) -> Self {
        let mut graph = Graph {
            cells: SimpleValueGrid::new(width, height, default_value),
            nodes: Vec::new(),
            adjacency: AdjacencyList::default(),
            start: None,
            goal: None,
            components: UnionFind::new(0),
            use_components: true,
        };
        graph.rebuild();
        graph
    }
    /// Cells outside the grid read as walls.
    fn get(&self, x: i32, y: i32) -> Category {
        if in_bounds(self.width(), self.height(), x, y) {
            self.cells.get(x, y)
        } else {
            Category::Wall
        }
    }
    /// Writes a single cell and rebuilds. Unlike [Graph::place_start] this does not clear a
    /// previous start or goal; writes outside the grid are ignored.
    fn set(&mut self, x: i32, y: i32, value: Category) {
        if !in_bounds(self.width(), self.height(), x, y) {
            warn!("Ignoring write to ({}, {}) outside the grid", x, y);
            return;
        }
        self.cells.set(x, y, value);
        self.rebuild();
    }
    fn width(&self) -> usize {
        self.cells.width()
    }
    fn height(&self) -> usize {
        self.cells.height()
    }
}
