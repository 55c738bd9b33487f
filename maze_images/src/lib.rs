use image::{Rgba, RgbaImage};
use log::warn;
use maze_walker::{
    decode, solve_pixels, Color, DecodedMaze, MazeError, MazeGrid, MazeSolver, Position,
    SolutionRecord, WalkStatus, GRID_OFFSET, GRID_SIZE, IMAGE_SIZE,
};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

pub mod mazes;

#[derive(Error, Debug)]
pub enum ImagesError {
    #[error("Failed to load image: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Maze(#[from] MazeError),
}

/// A decoded image file as the raw row-major RGBA buffer the maze decoder consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeImage {
    pub pixels: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl MazeImage {
    pub fn decode(&self) -> Result<DecodedMaze, MazeError> {
        decode(&self.pixels, self.width, self.height)
    }
}

impl From<RgbaImage> for MazeImage {
    fn from(img: RgbaImage) -> MazeImage {
        let (width, height) = img.dimensions();
        MazeImage {
            pixels: img.into_raw(),
            width: width as usize,
            height: height as usize,
        }
    }
}

/// Loads any format the `image` crate understands and converts it to 8-bit RGBA.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<MazeImage, ImagesError> {
    let img = image::open(path)?.to_rgba8();
    Ok(img.into())
}

/// All `.png` files below `root`, sorted by path.
pub fn maze_image_paths<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                let is_png = entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map_or(false, |ext| ext.eq_ignore_ascii_case("png"));
                if entry.file_type().is_file() && is_png {
                    paths.push(entry.into_path());
                }
            }
            Err(err) => warn!("Skipping unreadable entry: {}", err),
        }
    }
    paths.sort();
    paths
}

/// Where the solution record of `image_path` goes: `<out_dir>/<file stem>.json`.
pub fn solution_path<P: AsRef<Path>>(out_dir: P, image_path: &Path) -> PathBuf {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "maze".to_owned());
    out_dir.as_ref().join(format!("{}.json", stem))
}

/// Loads, decodes and solves a maze image file.
pub fn solve_image_file<P: AsRef<Path>, S: MazeSolver>(
    path: P,
    solver: &S,
) -> Result<(SolutionRecord, WalkStatus), ImagesError> {
    let img = load_rgba(path)?;
    Ok(solve_pixels(&img.pixels, img.width, img.height, solver)?)
}

pub fn write_record<P: AsRef<Path>>(path: P, record: &SolutionRecord) -> Result<(), ImagesError> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, record.to_json()?)?;
    Ok(())
}

pub fn read_record<P: AsRef<Path>>(path: P) -> Result<SolutionRecord, ImagesError> {
    let json = fs::read_to_string(path)?;
    Ok(SolutionRecord::from_json(&json)?)
}

pub fn color_to_rgba(color: Color) -> Rgba<u8> {
    match color {
        Color::White => Rgba([255, 255, 255, 255]),
        Color::Black => Rgba([0, 0, 0, 255]),
        Color::Red => Rgba([255, 0, 0, 255]),
        Color::Blue => Rgba([0, 0, 255, 255]),
        Color::Other => Rgba([128, 128, 128, 255]),
    }
}

fn fill(img: &mut RgbaImage, xs: std::ops::Range<usize>, ys: std::ops::Range<usize>, color: Color) {
    let px = color_to_rgba(color);
    for y in ys {
        for x in xs.clone() {
            img.put_pixel((x + GRID_OFFSET) as u32, (y + GRID_OFFSET) as u32, px);
        }
    }
}

/// Paints `grid` in the 322x322 layout the decoder expects: a black frame, white 16px
/// cells, each wall drawn as a full-length line in its color and the center as a small
/// square. Cells beyond the 20x20 the image has room for are left out.
pub fn paint_maze(grid: &MazeGrid) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(
        IMAGE_SIZE as u32,
        IMAGE_SIZE as u32,
        color_to_rgba(Color::Black),
    );
    let fits = (IMAGE_SIZE - 2 * GRID_OFFSET) / GRID_SIZE;
    let side = grid.side().min(fits);
    for y in 0..side {
        for x in 0..side {
            let Some(block) = grid.get(Position::new(x as i32, y as i32)) else {
                continue;
            };
            let (bx, by) = (x * GRID_SIZE, y * GRID_SIZE);
            let cell = bx..bx + GRID_SIZE;
            let rows = by..by + GRID_SIZE;
            fill(&mut img, cell.clone(), rows.clone(), Color::White);
            fill(&mut img, cell.clone(), by..by + 1, block.north);
            fill(&mut img, cell, by + GRID_SIZE - 1..by + GRID_SIZE, block.south);
            fill(&mut img, bx..bx + 1, rows.clone(), block.west);
            fill(&mut img, bx + GRID_SIZE - 1..bx + GRID_SIZE, rows, block.east);
            fill(&mut img, bx + 6..bx + 11, by + 6..by + 11, block.center);
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_walker::{Block, Direction};

    fn open_rows_maze() -> MazeGrid {
        let mut grid = MazeGrid::new(20, Block::walled());
        for y in 0..20 {
            for x in 0..19 {
                grid.carve(Position::new(x, y), Direction::East);
            }
        }
        grid.set_center(Position::new(0, 0), Color::Blue);
        grid.set_center(Position::new(19, 19), Color::Red);
        grid
    }

    #[test]
    fn paint_then_decode() {
        let grid = open_rows_maze();
        let img = MazeImage::from(paint_maze(&grid));
        assert_eq!((img.width, img.height), (IMAGE_SIZE, IMAGE_SIZE));
        let maze = img.decode().unwrap();
        assert_eq!(maze.grid, grid);
        assert_eq!(maze.start, Position::new(0, 0));
        assert_eq!(maze.end, Position::new(19, 19));
    }

    #[test]
    fn frame_stays_black() {
        let img = paint_maze(&open_rows_maze());
        for i in 0..IMAGE_SIZE as u32 {
            assert_eq!(*img.get_pixel(i, 0), color_to_rgba(Color::Black));
            assert_eq!(*img.get_pixel(0, i), color_to_rgba(Color::Black));
            assert_eq!(*img.get_pixel(i, IMAGE_SIZE as u32 - 1), color_to_rgba(Color::Black));
        }
    }

    #[test]
    fn other_paints_as_other() {
        let px = color_to_rgba(Color::Other);
        assert_eq!(maze_walker::pixel_to_color(px[0], px[1], px[2]), Color::Other);
    }

    #[test]
    fn solution_file_name() {
        assert_eq!(
            solution_path("solutions", Path::new("mazes/4.png")),
            PathBuf::from("solutions/4.json")
        );
    }
}
