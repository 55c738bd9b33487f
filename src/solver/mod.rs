use crate::{decoder::DecodedMaze, direction::Position, maze_grid::MazeGrid};

pub mod wall_follower;

pub use wall_follower::{MazeWalker, Move, WallFollower, WalkerState};

/// How a walk ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkStatus {
    /// The walker stands on the end cell.
    Solved,
    /// The iteration limit ran out first. The walk still holds the path taken so far.
    CapExceeded,
}

/// The positions a solver walked through, in order, starting with the start cell. Revisits
/// show up as repeated positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    pub steps: Vec<Position>,
    pub status: WalkStatus,
    /// Number of transitions performed, including turns in place.
    pub iterations: usize,
}

impl Walk {
    pub fn is_solved(&self) -> bool {
        self.status == WalkStatus::Solved
    }
}

pub trait MazeSolver {
    fn solve(&self, grid: &MazeGrid, start: Position, end: Position) -> Walk;

    fn solve_decoded(&self, maze: &DecodedMaze) -> Walk {
        self.solve(&maze.grid, maze.start, maze.end)
    }
}
