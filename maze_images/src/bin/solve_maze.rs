use anyhow::{bail, Context};
use clap::Parser;
use log::{error, info, warn};
use maze_images::{load_rgba, maze_image_paths, solution_path, write_record};
use maze_walker::solver::wall_follower::WallFollower;
use maze_walker::{MazeSolver, SolutionRecord, WalkStatus, ITERATION_LIMIT};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Solves 322x322 maze images with a right-hand wall follower and writes one JSON
/// solution record per image.
#[derive(Parser, Debug)]
#[command(name = "solve_maze", version)]
struct Args {
    /// Maze images, or directories searched recursively for .png files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory receiving `<image stem>.json` records.
    #[arg(short, long, default_value = "solutions")]
    out_dir: PathBuf,

    /// Walker transitions before a maze is given up on.
    #[arg(short, long, default_value_t = ITERATION_LIMIT)]
    iteration_limit: usize,

    /// Print the decoded maze as ASCII art.
    #[arg(short, long)]
    print: bool,
}

fn solve_one(path: &Path, args: &Args, solver: &WallFollower) -> anyhow::Result<WalkStatus> {
    let img = load_rgba(path)?;
    let maze = img
        .decode()
        .with_context(|| format!("Could not decode maze {}", path.display()))?;
    info!("{}: start {}, end {}", path.display(), maze.start, maze.end);
    if args.print {
        println!("{}", maze.grid);
    }

    let before = Instant::now();
    let walk = solver.solve_decoded(&maze);
    info!(
        "{}: {:?} with {} steps in {:.2?}",
        path.display(),
        walk.status,
        walk.steps.len(),
        before.elapsed()
    );

    let status = walk.status;
    let record = SolutionRecord {
        grid: maze.grid,
        start: maze.start,
        end: maze.end,
        solution: walk.steps,
    };
    let out = solution_path(&args.out_dir, path);
    write_record(&out, &record)
        .with_context(|| format!("Could not write solution {}", out.display()))?;
    Ok(status)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let solver = WallFollower::new().with_iteration_limit(args.iteration_limit);

    let mut images = Vec::new();
    for input in &args.inputs {
        if input.is_dir() {
            images.extend(maze_image_paths(input));
        } else {
            images.push(input.clone());
        }
    }
    if images.is_empty() {
        bail!("No maze images found");
    }

    let mut failed = 0;
    for path in &images {
        match solve_one(path, &args, &solver) {
            Ok(WalkStatus::Solved) => {}
            Ok(WalkStatus::CapExceeded) => {
                warn!("{}: no solution within {} iterations", path.display(), args.iteration_limit)
            }
            Err(err) => {
                error!("{}: {:#}", path.display(), err);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{} of {} mazes failed", failed, images.len());
    }
    Ok(())
}
