//! Media Translations Library
//!
//! Resolves free-text titles against TMDB and exports localized translations
//! for movies, series, seasons and episodes.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
