//! Command implementations.

pub mod moods;
pub mod probe;
pub mod render;
