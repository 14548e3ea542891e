use grid_util::Point;

/// Rejected edits and searches. None of these leave the grid modified.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("{point} lies outside the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
    #[error("wall endpoints {0} and {1} share neither a row nor a column")]
    NotColinear(Point, Point),
    #[error("no start has been placed")]
    MissingStart,
    #[error("no goal has been placed")]
    MissingGoal,
}

pub type GridResult<T> = Result<T, GridError>;
