//! Hand-built 20x20 mazes shared by tests and benches.
use maze_walker::{Block, Color, Direction, MazeGrid, Position};

pub const SIDE: i32 = 20;

/// A boustrophedon through all 400 cells: every row is open from west to east and
/// consecutive rows connect at alternating ends. Start top-left, end bottom-left.
pub fn serpentine() -> MazeGrid {
    let mut grid = MazeGrid::new(SIDE as usize, Block::walled());
    for y in 0..SIDE {
        for x in 0..SIDE - 1 {
            grid.carve(Position::new(x, y), Direction::East);
        }
        if y < SIDE - 1 {
            let x = if y % 2 == 0 { SIDE - 1 } else { 0 };
            grid.carve(Position::new(x, y), Direction::South);
        }
    }
    grid.set_center(Position::new(0, 0), Color::Blue);
    grid.set_center(Position::new(0, SIDE - 1), Color::Red);
    grid
}

/// The serpentine with the end moved into the bottom-right corner and that cell walled off
/// from both of its neighbours.
pub fn sealed_end() -> MazeGrid {
    let mut grid = serpentine();
    grid.set_center(Position::new(0, SIDE - 1), Color::White);
    let corner = Position::new(SIDE - 1, SIDE - 1);
    let mut block = Block::walled();
    block.center = Color::Red;
    grid.set_block(corner, block);
    for dir in [Direction::West, Direction::North] {
        let neighbour = corner + dir;
        if let Some(&b) = grid.get(neighbour) {
            let mut b = b;
            b.set_side(dir.turn_back(), Color::Black);
            grid.set_block(neighbour, b);
        }
    }
    grid
}
