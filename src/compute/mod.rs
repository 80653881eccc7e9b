//! Compute module - The colored Life engine.
//!
//! Every operation is pure and synchronous: each generation or placement
//! returns a new [`Grid`] and never touches the grid passed in.

mod blend;
mod engine;
mod grid;
mod merger;
mod neighborhood;
mod stability;
mod stamper;
mod stepper;

pub use blend::*;
pub use engine::*;
pub use grid::*;
pub use merger::*;
pub use neighborhood::*;
pub use stability::*;
pub use stamper::*;
pub use stepper::*;
