use std::collections::HashSet;

use crossterm::style::{Color, Stylize};
use tracing_subscriber::EnvFilter;

use mazeway::{
    CellState, Coord, Generator, Grid, Playback, Solver,
    config::LevelConfig,
    generate_maze,
    generators::rng_from_seed,
    router::{route, scatter_waypoints},
};

/// Usage: mazeway [cols rows [generator [solver [seed]]]]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to a file so the terminal stays free for the maze
    let file_appender = tracing_appender::rolling::never(".", "mazeway.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut level = LevelConfig::default();
    if let [cols, rows, ..] = args.as_slice() {
        level.cols = cols.parse()?;
        level.rows = rows.parse()?;
    }
    level.validate()?;
    let generator = match args.get(2) {
        Some(name) => name.parse::<Generator>()?,
        None => Generator::Dfs,
    };
    let solver = match args.get(3) {
        Some(name) => name.parse::<Solver>()?,
        None => Solver::AStar,
    };
    let seed = args.get(4).map(|s| s.parse::<u64>()).transpose()?;
    let mut rng = rng_from_seed(seed);

    tracing::info!(
        "Generating a {}x{} maze with {}",
        level.cols,
        level.rows,
        generator
    );
    let (_, log) = generate_maze(level.cols, level.rows, generator, &mut rng)?;

    // Step through the log the way an animated consumer would
    let mut playback = Playback::new(log)?;
    while playback.apply_next_step() {}
    tracing::info!(
        "Applied {}/{} generation steps",
        playback.current_step(),
        playback.total_steps()
    );
    let mut grid = playback.into_grid();

    let Some((start, goal)) = grid.default_endpoints() else {
        eprintln!("The maze has no open cells to place endpoints on.");
        return Ok(());
    };
    grid.mark_endpoints(start, goal)?;
    let waypoints = scatter_waypoints(&grid, level.waypoints, &mut rng);

    println!("{} | {} | {}", level.name, generator, solver);
    match route(&grid, start, &waypoints, goal, solver)? {
        Some(path) => {
            print_route(&grid, &path, &waypoints);
            let budget = level.step_budget(&grid, start, &waypoints, goal)?;
            println!(
                "Route found: {} steps (step budget {})",
                path.len() - 1,
                budget.map_or_else(|| "n/a".to_string(), |b| b.to_string())
            );
            tracing::info!("Route found with {} steps", path.len() - 1);
        }
        None => {
            grid.display();
            println!("No route through every waypoint to the goal.");
            tracing::info!("No route found");
        }
    }
    Ok(())
}

/// Prints the grid with the route and waypoints drawn over open cells.
fn print_route(grid: &Grid, path: &[Coord], waypoints: &[Coord]) {
    let on_route = path.iter().copied().collect::<HashSet<_>>();
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            let cell = grid[(x, y)];
            if cell == CellState::Path && waypoints.contains(&(x, y)) {
                print!("{}", "🟨".with(Color::Yellow));
            } else if cell == CellState::Path && on_route.contains(&(x, y)) {
                print!("{}", "* ".with(Color::Yellow));
            } else {
                print!("{}", cell);
            }
        }
        println!();
    }
}
