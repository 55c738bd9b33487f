//! Fuzzes the wall follower on many random grids, checking that every walk is physically
//! possible, bounded by the iteration limit and reproducible.
use super::*;
use crate::solver::wall_follower::{MazeWalker, WallFollower};
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng) -> MazeGrid {
    let mut grid = MazeGrid::new(n, Block::walled());
    for x in 0..n as i32 {
        for y in 0..n as i32 {
            if rng.gen_bool(0.6) {
                grid.carve(Position::new(x, y), Direction::East);
            }
            if rng.gen_bool(0.6) {
                grid.carve(Position::new(x, y), Direction::South);
            }
        }
    }
    grid
}

fn random_grid_point(grid: &MazeGrid, rng: &mut StdRng) -> Position {
    Position::new(
        rng.gen_range(0..grid.side()) as i32,
        rng.gen_range(0..grid.side()) as i32,
    )
}

fn visualize_walk(grid: &MazeGrid, walk: &Walk) {
    println!("{}", grid);
    println!("{:?}", walk.steps);
}

#[test]
fn fuzz() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = WallFollower::new();
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng);
        let start = random_grid_point(&grid, &mut rng);
        let end = random_grid_point(&grid, &mut rng);
        let walk = solver.solve(&grid, start, end);

        let valid = walk.steps.first() == Some(&start)
            && walk.iterations <= ITERATION_LIMIT
            && walk.steps.len() <= walk.iterations + 1
            && walk.steps.windows(2).all(|pair| {
                pair[0]
                    .direction_to(&pair[1])
                    .zip(grid.get(pair[0]))
                    .map_or(false, |(dir, block)| block.is_open(dir))
            })
            && match walk.status {
                WalkStatus::Solved => walk.steps.last() == Some(&end),
                WalkStatus::CapExceeded => {
                    walk.iterations == ITERATION_LIMIT && !walk.steps.contains(&end)
                }
            };
        if !valid {
            visualize_walk(&grid, &walk);
        }
        assert!(valid);
        assert_eq!(solver.solve(&grid, start, end), walk);
    }
}

#[test]
fn fuzz_symmetric_walls_round_trip_json() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let mut grid = random_grid(20, &mut rng);
        let start = random_grid_point(&grid, &mut rng);
        let end = random_grid_point(&grid, &mut rng);
        grid.set_center(start, Color::Blue);
        grid.set_center(end, Color::Red);
        let walk = WallFollower::new().solve(&grid, start, end);
        let record = SolutionRecord {
            grid,
            start,
            end,
            solution: walk.steps,
        };
        let json = record.to_json().unwrap();
        assert_eq!(SolutionRecord::from_json(&json).unwrap(), record);
    }
}

#[test]
fn fuzz_visited_matches_steps() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let grid = random_grid(8, &mut rng);
        let start = random_grid_point(&grid, &mut rng);
        let end = random_grid_point(&grid, &mut rng);
        let mut walker = MazeWalker::new(&grid, start, end);
        for _ in 0..rng.gen_range(0..200) {
            if walker.is_at_end() {
                break;
            }
            walker.step();
        }
        let state = walker.state();
        assert_eq!(state.position, *state.steps.last().unwrap());
        assert_eq!(state.direction, walker.direction());
        let stepped: fxhash::FxHashSet<Position> = state.steps.iter().copied().collect();
        assert_eq!(state.visited, stepped);
    }
}
