//! CLI library components for the Mutanabi poem generator.

pub mod logging;
pub mod render;
