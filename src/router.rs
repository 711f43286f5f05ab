//! Greedy multi-waypoint routing on top of the single-pair solvers.

use rand::{Rng, seq::SliceRandom};

use crate::error::MazeError;
use crate::maze::{CellState, Coord, Grid, Path};
use crate::solvers::{Solver, bfs_distance, solve};

/// Appends `leg` to `route`, dropping the leg's first cell when it repeats the route's last.
fn append_leg(route: &mut Path, leg: Path) {
    let skip = usize::from(!route.is_empty());
    route.extend(leg.into_iter().skip(skip));
}

/// Visits every waypoint, always heading for the nearest remaining one, then the goal.
///
/// "Nearest" is measured by the length of the path `solver` returns. Ties go to the waypoint
/// listed first. Returns `Ok(None)` as soon as no remaining waypoint can be reached, or when
/// the goal cannot be reached from the last waypoint.
pub fn route(
    grid: &Grid,
    start: Coord,
    waypoints: &[Coord],
    goal: Coord,
    solver: Solver,
) -> Result<Option<Path>, MazeError> {
    let mut remaining = waypoints.to_vec();
    let mut current = start;
    let mut full_path: Path = Vec::new();

    while !remaining.is_empty() {
        let mut nearest: Option<(usize, Path)> = None;
        for (idx, &waypoint) in remaining.iter().enumerate() {
            let Some(path) = solve(grid, current, waypoint, solver)? else {
                continue;
            };
            // Strictly shorter only, so the earliest waypoint wins ties
            if nearest.as_ref().is_none_or(|(_, best)| path.len() < best.len()) {
                nearest = Some((idx, path));
            }
        }

        let Some((idx, path)) = nearest else {
            tracing::debug!(
                "[route] none of {} remaining waypoints reachable from {:?}",
                remaining.len(),
                current
            );
            return Ok(None);
        };
        current = remaining.remove(idx);
        tracing::debug!("[route] leg to waypoint {:?}: {} cells", current, path.len());
        append_leg(&mut full_path, path);
    }

    let Some(path) = solve(grid, current, goal, solver)? else {
        tracing::debug!("[route] goal {:?} unreachable from {:?}", goal, current);
        return Ok(None);
    };
    append_leg(&mut full_path, path);
    tracing::debug!(
        "[route] {} route through {} waypoints: {} cells",
        solver,
        waypoints.len(),
        full_path.len()
    );
    Ok(Some(full_path))
}

/// Estimated number of steps for the greedy tour `start -> waypoints -> goal`.
///
/// Uses breadth-first distances only, whatever solver the caller routes with, and never
/// builds a path. Returns `Ok(None)` when some waypoint or the goal is unreachable.
pub fn estimate_total_distance(
    grid: &Grid,
    start: Coord,
    waypoints: &[Coord],
    goal: Coord,
) -> Result<Option<usize>, MazeError> {
    grid.get(start)?;
    grid.get(goal)?;
    for &waypoint in waypoints {
        grid.get(waypoint)?;
    }

    let mut remaining = waypoints.to_vec();
    let mut current = start;
    let mut total = 0;

    while !remaining.is_empty() {
        let nearest = remaining
            .iter()
            .enumerate()
            .filter_map(|(idx, &waypoint)| Some((idx, bfs_distance(grid, current, waypoint)?)))
            // min_by_key keeps the first of equal minimums
            .min_by_key(|&(_, dist)| dist);
        let Some((idx, dist)) = nearest else {
            return Ok(None);
        };
        total += dist;
        current = remaining.remove(idx);
    }

    Ok(bfs_distance(grid, current, goal).map(|dist| total + dist))
}

/// Picks up to `count` distinct plain `Path` cells at random, for use as waypoints.
///
/// `Start`, `End` and walls are never picked.
pub fn scatter_waypoints<R: Rng + ?Sized>(grid: &Grid, count: usize, rng: &mut R) -> Vec<Coord> {
    let mut candidates = grid
        .open_cells()
        .filter(|&c| grid[c] == CellState::Path)
        .collect::<Vec<_>>();
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze, rng_from_seed};
    use crate::maze::{is_valid_path, path_len};

    fn open_room() -> Grid {
        Grid::with_open_interior(9, 9).unwrap()
    }

    fn position(path: &[Coord], cell: Coord) -> usize {
        path.iter().position(|&c| c == cell).unwrap()
    }

    #[test]
    fn test_route_visits_waypoints_before_goal() {
        let grid = open_room();
        let (start, goal) = ((1, 1), (7, 7));
        let waypoints = [(3, 3), (5, 1)];
        for solver in Solver::ALL {
            let path = route(&grid, start, &waypoints, goal, solver).unwrap().unwrap();
            assert!(is_valid_path(&grid, &path, start, goal), "{}", solver);
            let goal_at = path.len() - 1;
            assert!(position(&path, (3, 3)) < goal_at);
            assert!(position(&path, (5, 1)) < goal_at);
        }
    }

    #[test]
    fn test_route_length_is_sum_of_greedy_legs() {
        let grid = open_room();
        let path = route(&grid, (1, 1), &[(3, 3), (5, 1)], (7, 7), Solver::Bfs)
            .unwrap()
            .unwrap();
        // (3,3) and (5,1) are both 4 steps from (1,1): the first listed wins the tie
        assert!(position(&path, (3, 3)) < position(&path, (5, 1)));
        let legs = bfs_distance(&grid, (1, 1), (3, 3)).unwrap()
            + bfs_distance(&grid, (3, 3), (5, 1)).unwrap()
            + bfs_distance(&grid, (5, 1), (7, 7)).unwrap();
        assert_eq!(path_len(&path), legs);
        assert_eq!(
            estimate_total_distance(&grid, (1, 1), &[(3, 3), (5, 1)], (7, 7)),
            Ok(Some(legs))
        );
    }

    #[test]
    fn test_tie_break_follows_listing_order() {
        let grid = open_room();
        let path = route(&grid, (1, 1), &[(5, 1), (3, 3)], (7, 7), Solver::AStar)
            .unwrap()
            .unwrap();
        assert!(position(&path, (5, 1)) < position(&path, (3, 3)));
    }

    #[test]
    fn test_no_waypoints_is_plain_solve() {
        let grid = open_room();
        let routed = route(&grid, (1, 1), &[], (7, 7), Solver::Bfs).unwrap();
        assert_eq!(routed, solve(&grid, (1, 1), (7, 7), Solver::Bfs).unwrap());
        assert_eq!(
            estimate_total_distance(&grid, (1, 1), &[], (1, 1)),
            Ok(Some(0))
        );
    }

    #[test]
    fn test_unreachable_waypoint_fails_route() {
        let mut grid = open_room();
        (0..9).for_each(|y| grid.set((4, y), CellState::Wall).unwrap());
        for solver in Solver::ALL {
            // Waypoint on the far side of the wall
            assert_eq!(
                route(&grid, (1, 1), &[(3, 3), (6, 6)], (2, 7), solver),
                Ok(None)
            );
            // Goal on the far side
            assert_eq!(route(&grid, (1, 1), &[(3, 3)], (7, 7), solver), Ok(None));
        }
        assert_eq!(
            estimate_total_distance(&grid, (1, 1), &[(3, 3), (6, 6)], (2, 7)),
            Ok(None)
        );
    }

    #[test]
    fn test_out_of_bounds_waypoint() {
        let grid = open_room();
        assert!(route(&grid, (1, 1), &[(20, 3)], (7, 7), Solver::Bfs).is_err());
        assert!(estimate_total_distance(&grid, (1, 1), &[(20, 3)], (7, 7)).is_err());
    }

    #[test]
    fn test_route_on_generated_maze() {
        let mut rng = rng_from_seed(Some(17));
        let (mut grid, _) = generate_maze(25, 19, Generator::Wilson, &mut rng).unwrap();
        let (start, goal) = grid.default_endpoints().unwrap();
        grid.mark_endpoints(start, goal).unwrap();
        let waypoints = scatter_waypoints(&grid, 3, &mut rng);
        assert_eq!(waypoints.len(), 3);

        let estimate = estimate_total_distance(&grid, start, &waypoints, goal)
            .unwrap()
            .unwrap();
        for solver in Solver::ALL {
            let path = route(&grid, start, &waypoints, goal, solver).unwrap().unwrap();
            assert!(is_valid_path(&grid, &path, start, goal));
            assert!(waypoints.iter().all(|w| path.contains(w)));
            // Every path in a perfect maze is the shortest one, so all solvers agree
            assert_eq!(path_len(&path), estimate, "{}", solver);
        }
    }

    #[test]
    fn test_scatter_waypoints() {
        let mut grid = Grid::with_open_interior(5, 5).unwrap();
        grid.mark_endpoints((1, 1), (3, 3)).unwrap();
        let mut rng = rng_from_seed(Some(1));
        let mut picked = scatter_waypoints(&grid, 3, &mut rng);
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|&c| grid[c] == CellState::Path));
        picked.sort();
        picked.dedup();
        assert_eq!(picked.len(), 3);
        // Asking for more than exist returns them all
        assert_eq!(scatter_waypoints(&grid, 100, &mut rng).len(), 7);
    }
}
