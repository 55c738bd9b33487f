use core::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::direction::{Direction, Position};
use crate::error::MazeError;

/// One maze cell: the colors sampled at its four walls and at its center.
/// A wall field is a passage iff it is [Color::White].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub north: Color,
    pub east: Color,
    pub south: Color,
    pub west: Color,
    pub center: Color,
}

impl Block {
    pub fn new(north: Color, east: Color, south: Color, west: Color, center: Color) -> Block {
        Block {
            north,
            east,
            south,
            west,
            center,
        }
    }
    /// A white cell closed on all four sides.
    pub fn walled() -> Block {
        Block::new(
            Color::Black,
            Color::Black,
            Color::Black,
            Color::Black,
            Color::White,
        )
    }
    pub fn side(&self, dir: Direction) -> Color {
        match dir {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }
    pub fn set_side(&mut self, dir: Direction, color: Color) {
        match dir {
            Direction::North => self.north = color,
            Direction::East => self.east = color,
            Direction::South => self.south = color,
            Direction::West => self.west = color,
        }
    }
    pub fn is_open(&self, dir: Direction) -> bool {
        self.side(dir).is_open()
    }
}

/// [MazeGrid] is a square grid of [Block]s stored row-major: the block at (x, y) lives at
/// index `x + y * side`. Serialized as a list of rows to match the existing record layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Block>>", into = "Vec<Vec<Block>>")]
pub struct MazeGrid {
    side: usize,
    blocks: Vec<Block>,
}

impl MazeGrid {
    pub fn new(side: usize, default_value: Block) -> MazeGrid {
        MazeGrid {
            side,
            blocks: vec![default_value; side * side],
        }
    }
    /// Builds a grid by calling `f(x, y)` for every cell in row-major order.
    pub fn from_fn<F>(side: usize, mut f: F) -> MazeGrid
    where
        F: FnMut(usize, usize) -> Block,
    {
        let mut blocks = Vec::with_capacity(side * side);
        for y in 0..side {
            for x in 0..side {
                blocks.push(f(x, y));
            }
        }
        MazeGrid { side, blocks }
    }
    /// Takes ownership of `side * side` blocks already in row-major order.
    pub(crate) fn from_blocks(side: usize, blocks: Vec<Block>) -> MazeGrid {
        debug_assert_eq!(blocks.len(), side * side);
        MazeGrid { side, blocks }
    }
    /// Number of cells along each edge.
    pub fn side(&self) -> usize {
        self.side
    }
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.side && (pos.y as usize) < self.side
    }
    pub fn get_ix(&self, x: usize, y: usize) -> usize {
        x + y * self.side
    }
    pub fn get(&self, pos: Position) -> Option<&Block> {
        if self.in_bounds(pos) {
            self.blocks.get(self.get_ix(pos.x as usize, pos.y as usize))
        } else {
            None
        }
    }
    fn get_mut(&mut self, pos: Position) -> Option<&mut Block> {
        if self.in_bounds(pos) {
            let ix = self.get_ix(pos.x as usize, pos.y as usize);
            self.blocks.get_mut(ix)
        } else {
            None
        }
    }
    /// Replaces a block. Out-of-bounds positions are ignored and reported with [false].
    pub fn set_block(&mut self, pos: Position, block: Block) -> bool {
        match self.get_mut(pos) {
            Some(b) => {
                *b = block;
                true
            }
            None => false,
        }
    }
    pub fn set_center(&mut self, pos: Position, color: Color) -> bool {
        match self.get_mut(pos) {
            Some(b) => {
                b.center = color;
                true
            }
            None => false,
        }
    }
    /// Opens the wall between `pos` and its neighbour in `dir` on both cells, keeping the
    /// encoding symmetric. Returns [false] if either cell lies outside the grid.
    pub fn carve(&mut self, pos: Position, dir: Direction) -> bool {
        let neighbour = pos + dir;
        if !self.in_bounds(pos) || !self.in_bounds(neighbour) {
            return false;
        }
        if let Some(b) = self.get_mut(pos) {
            b.set_side(dir, Color::White);
        }
        if let Some(b) = self.get_mut(neighbour) {
            b.set_side(dir.turn_back(), Color::White);
        }
        true
    }
    pub fn rows(&self) -> impl Iterator<Item = &[Block]> {
        // chunks panics on a zero chunk size
        self.blocks.chunks(self.side.max(1))
    }
    /// Owned copy of the rows, the serialized layout.
    pub fn to_rows(&self) -> Vec<Vec<Block>> {
        self.rows().map(<[Block]>::to_vec).collect()
    }
    /// All positions whose center has the given color, in row-major order.
    pub fn find_center(&self, color: Color) -> impl Iterator<Item = Position> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .filter(move |(_, b)| b.center == color)
            .map(|(ix, _)| Position::new((ix % self.side) as i32, (ix / self.side) as i32))
    }
}

impl TryFrom<Vec<Vec<Block>>> for MazeGrid {
    type Error = MazeError;

    fn try_from(rows: Vec<Vec<Block>>) -> Result<Self, Self::Error> {
        let side = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != side) {
            return Err(MazeError::NotSquare {
                rows: side,
                columns: row.len(),
            });
        }
        Ok(MazeGrid {
            side,
            blocks: rows.into_iter().flatten().collect(),
        })
    }
}

impl From<MazeGrid> for Vec<Vec<Block>> {
    fn from(grid: MazeGrid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            for b in row {
                write!(f, "+{}", if b.is_open(Direction::North) { "  " } else { "--" })?;
            }
            writeln!(f, "+")?;
            for b in row {
                let marker = match b.center {
                    Color::Blue => "S ",
                    Color::Red => "E ",
                    _ => "  ",
                };
                write!(f, "{}{}", if b.is_open(Direction::West) { " " } else { "|" }, marker)?;
            }
            match row.last() {
                Some(b) if b.is_open(Direction::East) => writeln!(f, " ")?,
                Some(_) => writeln!(f, "|")?,
                None => writeln!(f)?,
            }
        }
        if let Some(row) = self.rows().last() {
            for b in row {
                write!(f, "+{}", if b.is_open(Direction::South) { "  " } else { "--" })?;
            }
            writeln!(f, "+")?;
        }
        Ok(())
    }
}
