/*!
# Rust Language Module

This Rust module loads Minimal-2D source into a grid of cells and
describes the errors that can happen before a program starts running.

*/

#[macro_use]
mod error;
mod grid;

pub use error::Error;
pub use error::ErrorCode;
pub use grid::Grid;
