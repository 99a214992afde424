//! Output path generators.

pub mod filename;
pub mod folder;
