use fxhash::FxHashSet;
use log::{info, warn};

use crate::{
    direction::{Direction, Position},
    maze_grid::MazeGrid,
    solver::{MazeSolver, Walk, WalkStatus},
    ITERATION_LIMIT,
};

/// Outcome of a single walker transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Turned clockwise and stepped into the given cell.
    TurnRight(Position),
    /// Stepped straight ahead into the given cell.
    Forward(Position),
    /// Turned counter-clockwise in place.
    TurnLeft,
}

/// Mutable state of a walk. `visited` is bookkeeping only and never influences a decision.
#[derive(Clone, Debug)]
pub struct WalkerState {
    pub position: Position,
    pub direction: Direction,
    pub visited: FxHashSet<Position>,
    pub steps: Vec<Position>,
}

impl WalkerState {
    pub fn new(start: Position) -> WalkerState {
        let mut visited = FxHashSet::default();
        visited.insert(start);
        WalkerState {
            position: start,
            direction: Direction::East,
            visited,
            steps: vec![start],
        }
    }
}

/// Right-hand wall follower over a borrowed [MazeGrid]. Each [step](Self::step) turns right
/// and moves if it can, else moves straight ahead, else turns left in place.
///
/// Only the walls of the current cell decide whether a move is allowed; the neighbour's
/// walls are never read. Moves that would leave the grid are refused.
pub struct MazeWalker<'a> {
    grid: &'a MazeGrid,
    end: Position,
    state: WalkerState,
}

impl<'a> MazeWalker<'a> {
    pub fn new(grid: &'a MazeGrid, start: Position, end: Position) -> MazeWalker<'a> {
        MazeWalker {
            grid,
            end,
            state: WalkerState::new(start),
        }
    }
    pub fn position(&self) -> Position {
        self.state.position
    }
    pub fn direction(&self) -> Direction {
        self.state.direction
    }
    pub fn steps(&self) -> &[Position] {
        &self.state.steps
    }
    pub fn state(&self) -> &WalkerState {
        &self.state
    }
    pub fn is_visited(&self, pos: &Position) -> bool {
        self.state.visited.contains(pos)
    }
    pub fn visited_count(&self) -> usize {
        self.state.visited.len()
    }
    pub fn is_at_end(&self) -> bool {
        self.state.position == self.end
    }

    /// A move is allowed into an orthogonal neighbour inside the grid whose facing wall of
    /// the current cell is open.
    pub fn can_move_to(&self, pos: Position) -> bool {
        let current = self.state.position;
        match (current.direction_to(&pos), self.grid.get(current)) {
            (Some(dir), Some(block)) => block.is_open(dir) && self.grid.in_bounds(pos),
            _ => false,
        }
    }

    fn move_to(&mut self, pos: Position) {
        self.state.position = pos;
        self.state.steps.push(pos);
        self.state.visited.insert(pos);
    }

    /// Performs one transition of the right-hand rule.
    pub fn step(&mut self) -> Move {
        let right_pos = self.state.position + self.state.direction.turn_right();
        let ahead_pos = self.state.position + self.state.direction;
        if self.can_move_to(right_pos) {
            self.state.direction = self.state.direction.turn_right();
            self.move_to(right_pos);
            Move::TurnRight(right_pos)
        } else if self.can_move_to(ahead_pos) {
            self.move_to(ahead_pos);
            Move::Forward(ahead_pos)
        } else {
            self.state.direction = self.state.direction.turn_left();
            Move::TurnLeft
        }
    }

    /// Steps until the end is reached or `iteration_limit` transitions were made, whichever
    /// comes first, and hands back the walked path.
    pub fn finish(mut self, iteration_limit: usize) -> Walk {
        let mut iterations = 0;
        while !self.is_at_end() {
            if iterations >= iteration_limit {
                warn!(
                    "Iteration limit of {} reached at {} without finding {}",
                    iteration_limit, self.state.position, self.end
                );
                return Walk {
                    steps: self.state.steps,
                    status: WalkStatus::CapExceeded,
                    iterations,
                };
            }
            self.step();
            iterations += 1;
        }
        info!(
            "Solution found, took {} steps over {} iterations",
            self.state.steps.len(),
            iterations
        );
        Walk {
            steps: self.state.steps,
            status: WalkStatus::Solved,
            iterations,
        }
    }
}

/// [MazeSolver] running a [MazeWalker] from east-facing start with a bounded number of
/// transitions.
#[derive(Clone, Copy, Debug)]
pub struct WallFollower {
    pub iteration_limit: usize,
}

impl Default for WallFollower {
    fn default() -> WallFollower {
        WallFollower {
            iteration_limit: ITERATION_LIMIT,
        }
    }
}

impl WallFollower {
    pub fn new() -> WallFollower {
        WallFollower::default()
    }
    pub fn with_iteration_limit(mut self, iteration_limit: usize) -> WallFollower {
        self.iteration_limit = iteration_limit;
        self
    }
}

impl MazeSolver for WallFollower {
    fn solve(&self, grid: &MazeGrid, start: Position, end: Position) -> Walk {
        MazeWalker::new(grid, start, end).finish(self.iteration_limit)
    }
}
