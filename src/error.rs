use thiserror::Error;

use crate::direction::Position;

/// The two center markers a decoded maze must contain exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Start,
    End,
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::Start => write!(f, "start (blue)"),
            Marker::End => write!(f, "end (red)"),
        }
    }
}

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Wrong image dimensions: width={width}, height={height}, expected {expected}x{expected}")]
    Dimensions {
        width: usize,
        height: usize,
        expected: usize,
    },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferLength { expected: usize, actual: usize },

    #[error("No {0} marker found in maze")]
    MissingMarker(Marker),

    #[error("Found more than one {marker} marker: {first} and {second}")]
    DuplicateMarker {
        marker: Marker,
        first: Position,
        second: Position,
    },

    #[error("Grid is not square: {rows} rows, row of {columns} columns")]
    NotSquare { rows: usize, columns: usize },

    #[error("Invalid color value {0}")]
    InvalidColor(u8),

    #[error("Solution record (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
