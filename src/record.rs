use serde::{Deserialize, Serialize};

use crate::direction::Position;
use crate::error::MazeError;
use crate::maze_grid::MazeGrid;

/// Everything a solved maze produces: the decoded grid, both markers and the walked path.
/// The JSON layout (`grid` as rows of blocks with integer colors, positions as `{x, y}`)
/// is the one the replay viewer reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub grid: MazeGrid,
    pub start: Position,
    pub end: Position,
    pub solution: Vec<Position>,
}

impl SolutionRecord {
    pub fn to_json(&self) -> Result<String, MazeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
    pub fn from_json(json: &str) -> Result<SolutionRecord, MazeError> {
        Ok(serde_json::from_str(json)?)
    }
}
