use itertools::iproduct;
use log::debug;

use crate::color::{pixel_to_color, Color};
use crate::direction::Position;
use crate::error::{Marker, MazeError};
use crate::maze_grid::{Block, MazeGrid};
use crate::{CHANNELS, GRID_OFFSET, GRID_SIZE, IMAGE_SIZE, SAMPLE_FAR_EDGE, SAMPLE_MIDDLE};

/// Result of [decode]: the grid plus the located start and end cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedMaze {
    pub grid: MazeGrid,
    pub start: Position,
    pub end: Position,
}

/// Read-only view of an RGBA buffer with the frame stripped off, so that (0, 0) is the
/// top-left pixel of the top-left cell.
struct CellPixels<'a> {
    data: &'a [u8],
    width: usize,
}

impl<'a> CellPixels<'a> {
    fn color_at(&self, x: usize, y: usize) -> Color {
        let i = ((x + GRID_OFFSET) + (y + GRID_OFFSET) * self.width) * CHANNELS;
        pixel_to_color(self.data[i], self.data[i + 1], self.data[i + 2])
    }
    fn block_at(&self, x: usize, y: usize) -> Block {
        let block_x = x * GRID_SIZE;
        let block_y = y * GRID_SIZE;
        Block {
            north: self.color_at(block_x + SAMPLE_MIDDLE, block_y),
            west: self.color_at(block_x, block_y + SAMPLE_MIDDLE),
            south: self.color_at(block_x + SAMPLE_MIDDLE, block_y + SAMPLE_FAR_EDGE),
            east: self.color_at(block_x + SAMPLE_FAR_EDGE, block_y + SAMPLE_MIDDLE),
            center: self.color_at(block_x + SAMPLE_MIDDLE, block_y + SAMPLE_MIDDLE),
        }
    }
}

/// Number of cells along each edge of an image of the given width.
pub(crate) fn grid_count(width: usize) -> usize {
    (width as f64 / GRID_SIZE as f64).round() as usize
}

fn record_marker(
    slot: &mut Option<Position>,
    marker: Marker,
    pos: Position,
) -> Result<(), MazeError> {
    match slot {
        Some(first) => Err(MazeError::DuplicateMarker {
            marker,
            first: *first,
            second: pos,
        }),
        None => {
            *slot = Some(pos);
            Ok(())
        }
    }
}

/// Decodes a row-major RGBA buffer of a 322x322 maze image into a 20x20 [MazeGrid].
/// Fails before touching any pixel if the dimensions or buffer length are wrong, and after
/// sampling if the start or end marker is missing or appears more than once.
pub fn decode(pixels: &[u8], width: usize, height: usize) -> Result<DecodedMaze, MazeError> {
    if width != IMAGE_SIZE || height != IMAGE_SIZE {
        return Err(MazeError::Dimensions {
            width,
            height,
            expected: IMAGE_SIZE,
        });
    }
    let expected = width * height * CHANNELS;
    if pixels.len() != expected {
        return Err(MazeError::BufferLength {
            expected,
            actual: pixels.len(),
        });
    }

    let count = grid_count(width);
    let view = CellPixels {
        data: pixels,
        width,
    };
    let mut blocks = Vec::with_capacity(count * count);
    let mut start = None;
    let mut end = None;
    for (y, x) in iproduct!(0..count, 0..count) {
        let block = view.block_at(x, y);
        let pos = Position::new(x as i32, y as i32);
        match block.center {
            Color::Blue => record_marker(&mut start, Marker::Start, pos)?,
            Color::Red => record_marker(&mut end, Marker::End, pos)?,
            _ => {}
        }
        blocks.push(block);
    }

    let start = start.ok_or(MazeError::MissingMarker(Marker::Start))?;
    let end = end.ok_or(MazeError::MissingMarker(Marker::End))?;
    debug!("Decoded {}x{} maze, start {}, end {}", count, count, start, end);
    Ok(DecodedMaze {
        grid: MazeGrid::from_blocks(count, blocks),
        start,
        end,
    })
}
