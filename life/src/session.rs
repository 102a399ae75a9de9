// session.rs - The simulation session: single owner of grid, edits, and playback

use std::time::{Duration, Instant};

use crate::engine;
use crate::grid::{Grid, InvalidDimensions};
use crate::interaction::{InteractionController, PointerButton};
use crate::playback::Playback;

/// Construction-time knobs, immutable once the session exists.
///
/// `resolution` is the square cell size in pixels, `density` weights the
/// random fill, `speed` is the default delay per generation, and
/// `grid_visibility` is the initial state of the advisory rendering flag.
#[derive(Debug, Clone)]
pub struct Settings {
    pub resolution: f32,
    pub density: f32,
    pub speed: Duration,
    pub grid_visibility: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: 7.0,
            density: 1.4,
            speed: Duration::from_millis(20),
            grid_visibility: false,
        }
    }
}

/// The one owner of the grid and of both mutation paths.
///
/// Scheduled transitions and pointer edits are all methods on this type, so
/// a tick and an edit can never interleave: whichever is called first runs to
/// completion on the shared timeline before the other sees the grid.
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    grid: Grid,
    interaction: InteractionController,
    playback: Playback,
    generation: u32,
    grid_visibility: bool,
    needs_redraw: bool,
}

impl Session {
    /// A paused session with every cell dead. Fails only on zero dimensions.
    pub fn new(settings: Settings, cols: usize, rows: usize) -> Result<Self, InvalidDimensions> {
        let grid = Grid::empty(cols, rows)?;
        Ok(Self {
            grid,
            interaction: InteractionController::new(settings.resolution),
            playback: Playback::new(settings.speed),
            generation: 0,
            grid_visibility: settings.grid_visibility,
            needs_redraw: true,
            settings,
        })
    }

    // --- playback surface ---

    pub fn play(&mut self, now: Instant) {
        self.playback.play(now);
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn toggle_play(&mut self, now: Instant) {
        if self.playback.is_paused() {
            self.play(now);
        } else {
            self.pause();
        }
    }

    pub fn set_speed(&mut self, speed: Duration) {
        self.playback.set_speed(speed);
    }

    /// Forces pause, restores the default speed, kills every cell, and asks
    /// the renderer for one redraw. Dimensions are preserved.
    pub fn restart(&mut self) {
        self.playback.restart();
        self.grid.clear();
        self.generation = 0;
        self.needs_redraw = true;
    }

    // --- tick path ---

    /// Advances one generation if a transition is due. Safe to call on every
    /// frame; while paused (or before the deadline) it is a no-op. Returns
    /// whether the grid changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playback.tick_due(now) {
            return false;
        }
        self.grid = engine::next(&self.grid);
        self.generation += 1;
        self.needs_redraw = true;
        true
    }

    // --- edit path ---

    /// Paints the cell under `(x, y)`: primary alive, secondary dead. Edits
    /// apply whether the simulation is running or paused; positions outside
    /// the grid do nothing.
    pub fn paint(&mut self, x: f32, y: f32, button: PointerButton) {
        if let Some((row, col)) = self.interaction.hit_test(&self.grid, x, y) {
            self.interaction.paint(&mut self.grid, row, col, button);
            self.needs_redraw = true;
        }
    }

    /// Tracks the pointer for the hover highlight. Positions outside the
    /// grid just clear it.
    pub fn hover(&mut self, x: f32, y: f32) {
        self.interaction.update_highlight(&mut self.grid, x, y);
        self.needs_redraw = true;
    }

    /// Refills the whole board from the configured density weight.
    pub fn random_fill(&mut self) {
        self.interaction
            .random_fill(&mut self.grid, self.settings.density, &mut rand::rng());
        self.needs_redraw = true;
    }

    pub fn set_grid_visibility(&mut self, visible: bool) {
        self.grid_visibility = visible;
        self.needs_redraw = true;
    }

    // --- read surface for the renderer ---

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_paused(&self) -> bool {
        self.playback.is_paused()
    }

    pub fn speed(&self) -> Duration {
        self.playback.speed()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn grid_visibility(&self) -> bool {
        self.grid_visibility
    }

    pub fn cell_size(&self) -> f32 {
        self.interaction.cell_size()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// One-shot redraw request, set by every grid mutation and consumed by
    /// the renderer once per frame.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
