//! Discovery search
//!
//! Depth-first flood fill from a newly revealed square. Open squares (empty or
//! diamond) keep the search going; walls are discovered and drawn but stop it.
//! An explicit stack replaces recursion so large grids cannot exhaust the call
//! stack.

use super::grid::Grid;
use super::position::{Direction, Position};
use crate::render::RenderSink;

/// Reveal everything reachable from `(x, y)`.
///
/// Does nothing if the seed is out of bounds or already discovered, so calling
/// this twice on the same seed draws nothing the second time. Returns the
/// number of cells newly discovered.
pub fn reveal(grid: &mut Grid, x: i32, y: i32, sink: &mut impl RenderSink) -> usize {
    if !grid.in_bounds(x, y) || grid.is_discovered(x, y) {
        return 0;
    }
    flood(grid, Position::new(x, y), sink)
}

/// Reveal from a square whose terrain just changed, typically a broken wall.
///
/// The seed was usually discovered already as part of a boundary, so it is
/// redrawn and searched from regardless of its flag.
pub fn reveal_opened(grid: &mut Grid, x: i32, y: i32, sink: &mut impl RenderSink) -> usize {
    if !grid.in_bounds(x, y) {
        return 0;
    }
    flood(grid, Position::new(x, y), sink)
}

fn flood(grid: &mut Grid, seed: Position, sink: &mut impl RenderSink) -> usize {
    let mut newly_discovered = usize::from(!grid.is_discovered(seed.x, seed.y));
    grid.set_discovered(seed.x, seed.y);

    // cells are flagged when pushed, so each one enters the stack at most once
    let mut to_visit = vec![seed];

    while let Some(pos) = to_visit.pop() {
        let terrain = grid.terrain_at(pos.x, pos.y);
        sink.render(pos.x, pos.y, terrain.display());

        if !terrain.is_open() {
            continue;
        }

        for dir in Direction::ALL {
            let next = pos.step(dir);
            if grid.contains(next) && !grid.is_discovered(next.x, next.y) {
                grid.set_discovered(next.x, next.y);
                newly_discovered += 1;
                to_visit.push(next);
            }
        }
    }

    log::debug!(
        "Discovery from ({}, {}) revealed {} cells",
        seed.x,
        seed.y,
        newly_discovered
    );
    newly_discovered
}
