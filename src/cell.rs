use core::fmt;

/// What occupies a single grid cell. Only [Category::Wall] is impassable; every other
/// category is an ordinary node of the graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Empty,
    Wall,
    Start,
    Goal,
    /// Marks a cell on the most recently found shortest path.
    Path,
}

impl Category {
    pub fn is_wall(self) -> bool {
        self == Category::Wall
    }

    /// Symbol used when rendering the grid.
    pub fn symbol(self) -> char {
        match self {
            Category::Empty => ' ',
            Category::Wall => '#',
            Category::Start => 's',
            Category::Goal => 'g',
            Category::Path => '.',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Graph counterpart of a non-wall cell. The category is a snapshot taken at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    pub index: usize,
    pub category: Category,
}

impl Node {
    pub fn new(index: usize, category: Category) -> Node {
        Node { index, category }
    }
}
