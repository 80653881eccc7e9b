//! Schema module - Colors, patterns, configuration and seeding for Chroma Life.

mod color;
mod config;
mod pattern;
mod seed;

pub use color::*;
pub use config::*;
pub use pattern::*;
pub use seed::*;
