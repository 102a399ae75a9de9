// interaction.rs - Pointer-driven grid edits: hit-testing, painting, hover highlight

use rand::Rng;

use crate::grid::Grid;

/// Pointer button identity as reported by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Maps pointer positions to cells and applies edits to the grid.
///
/// The cell size is an explicit construction parameter; pixel boxes are
/// derived from `(row, col)` and nothing else. The controller also remembers
/// which cell is currently highlighted so the previous marker can be cleared
/// without scanning the board.
#[derive(Debug)]
pub struct InteractionController {
    cell_size: f32,
    highlighted: Option<(usize, usize)>,
}

impl InteractionController {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            highlighted: None,
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// The currently highlighted cell, if any.
    pub fn highlighted(&self) -> Option<(usize, usize)> {
        self.highlighted
    }

    /// The cell whose pixel box contains the point, or `None` beyond the grid
    /// extent. Boxes are half-open (`[c*size, (c+1)*size)`), so a point on a
    /// shared edge belongs to exactly one cell, the same one every time.
    pub fn hit_test(&self, grid: &Grid, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_size).floor() as usize;
        let row = (y / self.cell_size).floor() as usize;
        (row < grid.height() && col < grid.width()).then_some((row, col))
    }

    /// Primary paints the cell alive, secondary paints it dead, anything else
    /// leaves the grid untouched. Out-of-bounds targets are ignored. Painting
    /// works the same whether the simulation is running or paused.
    pub fn paint(&self, grid: &mut Grid, row: usize, col: usize, button: PointerButton) {
        let Some(cell) = grid.get_mut(row as isize, col as isize) else {
            return;
        };
        match button {
            PointerButton::Primary => cell.alive = true,
            PointerButton::Secondary => cell.alive = false,
            _ => {}
        }
    }

    /// Moves the hover highlight to the cell under the pointer. The previous
    /// marker is cleared first; at most one cell is highlighted at a time,
    /// and a pointer outside the grid just clears.
    pub fn update_highlight(&mut self, grid: &mut Grid, x: f32, y: f32) {
        if let Some((row, col)) = self.highlighted.take() {
            if let Some(cell) = grid.get_mut(row as isize, col as isize) {
                cell.highlighted = false;
            }
        }
        if let Some((row, col)) = self.hit_test(grid, x, y) {
            if let Some(cell) = grid.get_mut(row as isize, col as isize) {
                cell.highlighted = true;
            }
            self.highlighted = Some((row, col));
        }
    }

    /// One-shot bulk edit: every cell's alive flag is redrawn independently.
    /// A cell comes up alive when a uniform draw from `[0, density)` reaches
    /// 1.0, so the default weight of 1.4 fills roughly 29% of the board and
    /// weights at or below 1 fill nothing. Hover markers are left alone.
    pub fn random_fill(&self, grid: &mut Grid, density: f32, rng: &mut impl Rng) {
        grid.for_each_mut(|cell, _, _| {
            cell.alive = density > 1.0 && rng.random_range(0.0..density) >= 1.0;
        });
    }
}
