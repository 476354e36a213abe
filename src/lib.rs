//! Conway's Game of Life (B3/S23) on a fixed-size torus.
#![warn(clippy::all)]

mod engine;
mod errors;
mod grid;
pub mod utils;

pub use engine::Mode;
pub use errors::{GridError, GridResult};
pub use grid::{Cell, Grid, Neighbors, NEIGHBORS};
pub use utils::Config;
