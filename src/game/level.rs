use std::collections::HashSet;

use super::grid::Grid;
use super::state::Position;

/// A solid rectangle of obstacle cells
struct Block {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

/// Build the obstacle layout for a level
///
/// Every level shares two horizontal sofas and two columns placed relative to
/// the grid edges; each level past the first adds one cell to a pillar running
/// down from the top centre.
pub fn obstacles_for_level(grid: &Grid, level: u32) -> HashSet<Position> {
    let cols = grid.width() as i32;
    let rows = grid.height() as i32;

    let blocks = [
        Block { x: 6, y: 6, w: 8, h: 1 },
        Block { x: 6, y: rows - 7, w: 8, h: 1 },
        Block { x: 2, y: 2, w: 1, h: 4 },
        Block { x: cols - 3, y: rows - 6, w: 1, h: 4 },
    ];

    let mut cells: HashSet<Position> = blocks
        .iter()
        .flat_map(|b| (0..b.w).flat_map(move |i| (0..b.h).map(move |j| (b.x + i, b.y + j))))
        .map(|(x, y)| grid.wrap(x, y))
        .collect();

    for i in 0..level.saturating_sub(1) as i32 {
        cells.insert(grid.wrap(cols / 2, 3 + i));
    }

    cells
}
