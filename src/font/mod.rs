//! Font preparation: embedded templates, sanity checks and per-font generation

pub mod prepare;
pub mod templates;
pub mod validate;

pub use prepare::prepare_fonts;
pub use validate::{inspect_font, FontCheck};
