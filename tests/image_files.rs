use maze_images::{
    load_rgba, maze_image_paths, paint_maze, read_record, solution_path, solve_image_file,
    write_record, ImagesError,
};
use maze_walker::solver::wall_follower::WallFollower;
use maze_walker::{MazeError, WalkStatus};
use std::fs;
use std::path::PathBuf;

use maze_images::mazes::serpentine;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("maze_walker_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn png_round_trip() {
    let dir = scratch_dir("png");
    let path = dir.join("serpentine.png");
    paint_maze(&serpentine()).save(&path).unwrap();

    let img = load_rgba(&path).unwrap();
    assert_eq!(img.decode().unwrap().grid, serpentine());

    let (record, status) = solve_image_file(&path, &WallFollower::new()).unwrap();
    assert_eq!(status, WalkStatus::Solved);
    let out = solution_path(dir.join("solutions"), &path);
    write_record(&out, &record).unwrap();
    assert_eq!(read_record(&out).unwrap(), record);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn finds_png_files() {
    let dir = scratch_dir("find");
    fs::create_dir_all(dir.join("nested")).unwrap();
    let img = paint_maze(&serpentine());
    img.save(dir.join("b.png")).unwrap();
    img.save(dir.join("nested").join("a.png")).unwrap();
    fs::write(dir.join("notes.txt"), "not a maze").unwrap();

    let paths = maze_image_paths(&dir);
    assert_eq!(paths, vec![dir.join("b.png"), dir.join("nested").join("a.png")]);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_file_and_bad_image() {
    let dir = scratch_dir("bad");
    assert!(matches!(
        load_rgba(dir.join("missing.png")),
        Err(ImagesError::Image(_))
    ));

    let small = dir.join("small.png");
    image::RgbaImage::new(16, 16).save(&small).unwrap();
    assert!(matches!(
        solve_image_file(&small, &WallFollower::new()),
        Err(ImagesError::Maze(MazeError::Dimensions { .. }))
    ));
    fs::remove_dir_all(&dir).unwrap();
}
