//! Prepare TrueType fonts for a LaTeX document and compile it with pdflatex.
//!
//! A run writes the encoding table and one font-family declaration per font,
//! asks `ttf2tfm` for the metrics, checks the document defines a command for
//! every prepared font, runs the compiler and finally removes what it made.

pub mod cli;
pub mod document;
pub mod error;
pub mod font;
pub mod models;
pub mod pipeline;
pub mod tools;
pub mod utils;

pub use error::{Error, Result};
pub use pipeline::{run, RunReport};
