//! External services.

pub mod catalog;
pub mod spreadsheet;
pub mod tmdb;
