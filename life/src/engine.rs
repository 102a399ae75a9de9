// engine.rs - The generation transition rule (B3/S23)

use crate::grid::{Cell, Grid};

/// Computes the next generation from `grid`.
///
/// Pure: the input is only read, the output has the same dimensions, and no
/// partially-updated state is ever observable. Hover markers carry over
/// untouched.
pub fn next(grid: &Grid) -> Grid {
    grid.map(|cell, row, col| {
        let count = alive_neighbors(grid, row, col);
        let alive = match (cell.alive, count) {
            (true, 2) | (true, 3) => true,   // Survival
            (false, 3)            => true,   // Birth
            _                     => false,  // Death or stays dead
        };
        Cell {
            alive,
            highlighted: cell.highlighted,
        }
    })
}

/// Live cells among the eight Moore neighbors. Off-grid neighbors count as
/// dead; the board edge clips, it does not wrap.
pub fn alive_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    grid.neighbors(row as isize, col as isize)
        .into_iter()
        .flatten()
        .filter(|cell| cell.alive)
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, live: &[(isize, isize)]) -> Grid {
        let mut grid = Grid::empty(width, height).unwrap();
        for &(row, col) in live {
            grid.set(row, col, Cell::ALIVE);
        }
        grid
    }

    fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut live = Vec::new();
        grid.for_each(|cell, row, col| {
            if cell.alive {
                live.push((row, col));
            }
        });
        live
    }

    #[test]
    fn lonely_cells_die() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        assert!(live_cells(&next(&grid)).is_empty());

        // One neighbor is still underpopulation
        let grid = grid_with(5, 5, &[(2, 2), (2, 3)]);
        assert!(live_cells(&next(&grid)).is_empty());
    }

    #[test]
    fn crowded_cells_die() {
        // The center has four live neighbors
        let grid = grid_with(5, 5, &[(2, 2), (1, 1), (1, 3), (3, 1), (3, 3)]);
        assert!(!next(&grid).get(2, 2).unwrap().alive);
    }

    #[test]
    fn three_neighbors_give_birth() {
        let grid = grid_with(5, 5, &[(1, 1), (1, 2), (2, 1)]);
        assert!(next(&grid).get(2, 2).unwrap().alive);
    }

    #[test]
    fn two_neighbors_do_not_give_birth() {
        let grid = grid_with(5, 5, &[(1, 1), (1, 3)]);
        assert!(!next(&grid).get(1, 2).unwrap().alive);
    }

    #[test]
    fn block_is_a_still_life() {
        let grid = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let once = next(&grid);
        let twice = next(&once);
        assert_eq!(once, grid);
        assert_eq!(twice, grid);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = next(&horizontal);
        assert_eq!(live_cells(&vertical), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(next(&vertical), horizontal);
    }

    #[test]
    fn edges_clip_instead_of_wrapping() {
        // A live row along the top edge of a 3x3 board. With wraparound every
        // cell would see the bottom row too; with clipping the result is a
        // two-cell column at (0,1) and (1,1).
        let grid = grid_with(3, 3, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(live_cells(&next(&grid)), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn dimensions_never_change() {
        let grid = grid_with(7, 4, &[(1, 1), (2, 2)]);
        let stepped = next(&grid);
        assert_eq!((stepped.width(), stepped.height()), (7, 4));
    }

    #[test]
    fn highlight_survives_the_transition() {
        let mut grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        // One marker on a cell that survives, one on a cell that stays dead
        grid.set(2, 2, Cell { alive: true, highlighted: true });
        grid.set(0, 4, Cell { alive: false, highlighted: true });

        let stepped = next(&grid);
        assert!(stepped.get(2, 2).unwrap().highlighted);
        assert!(stepped.get(0, 4).unwrap().highlighted);
        // And the marker itself never feeds the rule
        assert!(!stepped.get(0, 4).unwrap().alive);
    }
}
