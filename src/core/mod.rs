//! Core business logic modules.

pub mod exporter;
pub mod parser;
pub mod pipeline;
pub mod resolver;
pub mod similarity;
pub mod walker;
