// lib.rs - Game of Life simulation engine

//! Bounded-grid Conway's Game of Life: the grid container, the B3/S23
//! transition rule, pointer-driven editing, and the play/pause scheduler.
//! Rendering and raw event plumbing live with the collaborators (see the
//! `life_gui` crate); this crate never touches a display surface.

pub mod engine;
pub mod grid;
pub mod interaction;
pub mod playback;
pub mod session;

pub use grid::{Cell, Grid, InvalidDimensions};
pub use interaction::{InteractionController, PointerButton};
pub use playback::Playback;
pub use session::{Session, Settings};
