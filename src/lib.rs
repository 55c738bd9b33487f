//! # maze_walker
//!
//! Decodes a fixed-layout maze image into a grid of [Block]s and walks it with a
//! [right-hand wall follower](https://en.wikipedia.org/wiki/Maze-solving_algorithm#Wall_follower).
//! The decoder expects a 322x322 RGBA buffer with a 1px frame around a 20x20 grid of 16px
//! cells. Each cell is sampled at five fixed points: one per wall and one at the center,
//! where a blue center marks the start and a red center marks the end.
//!
//! The walker is a local heuristic, not a shortest-path search. It gives up after
//! [ITERATION_LIMIT] transitions and returns the path it walked so far.
mod color;
mod decoder;
mod direction;
pub mod error;
mod maze_grid;
mod record;
pub mod solver;

#[cfg(test)]
mod fuzz_test;

pub use crate::color::{pixel_to_color, Color};
pub use crate::decoder::{decode, DecodedMaze};
pub use crate::direction::{Direction, Position};
pub use crate::error::{Marker, MazeError};
pub use crate::maze_grid::{Block, MazeGrid};
pub use crate::record::SolutionRecord;
pub use crate::solver::{MazeSolver, Walk, WalkStatus};

/// Width and height in pixels of the only supported maze image layout.
pub const IMAGE_SIZE: usize = 322;
/// Side length in pixels of a single maze cell.
pub const GRID_SIZE: usize = 16;
/// Width of the frame around the cells that belongs to no cell.
pub const GRID_OFFSET: usize = 1;
/// Bytes per pixel in the RGBA input buffer.
pub const CHANNELS: usize = 4;
/// Offset inside a cell of the north, west and center sample points.
pub const SAMPLE_MIDDLE: usize = 8;
/// Offset inside a cell of the south and east sample points.
pub const SAMPLE_FAR_EDGE: usize = 15;
/// Maximum number of walker transitions before a walk is abandoned.
pub const ITERATION_LIMIT: usize = 5000;

/// Decodes an RGBA buffer, walks the maze with `solver` and bundles everything into a
/// [SolutionRecord]. Decode errors abort; a walk that hits the cap is still returned,
/// flagged by [WalkStatus::CapExceeded].
pub fn solve_pixels<S: MazeSolver>(
    pixels: &[u8],
    width: usize,
    height: usize,
    solver: &S,
) -> Result<(SolutionRecord, WalkStatus), MazeError> {
    let DecodedMaze { grid, start, end } = decode(pixels, width, height)?;
    let walk = solver.solve(&grid, start, end);
    let status = walk.status;
    Ok((
        SolutionRecord {
            grid,
            start,
            end,
            solution: walk.steps,
        },
        status,
    ))
}
