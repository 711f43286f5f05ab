use std::time::Instant;

use tracing_subscriber::EnvFilter;

use mazeway::{Generator, Solver, generate_maze, generators::rng_from_seed, solvers::search};

/// Times every generator and solver on a 255x255 grid.
fn main() -> Result<(), mazeway::MazeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);
    let (cols, rows) = (255, 255);

    for generator in Generator::ALL {
        let mut rng = rng_from_seed(Some(0));
        let started = Instant::now();
        let mut steps = 0;
        let mut last = None;
        for _ in 0..num_iters {
            let (grid, log) = generate_maze(cols, rows, generator, &mut rng)?;
            steps += log.len();
            last = Some(grid);
        }
        tracing::info!(
            "{}: {:?} per maze, {} steps on average",
            generator,
            started.elapsed() / num_iters.max(1) as u32,
            steps / num_iters.max(1)
        );

        let Some(grid) = last else { continue };
        let Some((start, goal)) = grid.default_endpoints() else {
            continue;
        };
        for solver in Solver::ALL {
            let started = Instant::now();
            let report = search(&grid, start, goal, solver)?;
            tracing::info!(
                "  {}: {:?}, expanded {} cells, path of {} cells",
                solver,
                started.elapsed(),
                report.expanded,
                report.path.map_or(0, |p| p.len())
            );
        }
    }
    Ok(())
}
