//! Data shared between the stages of a run

pub mod config;
pub mod context;
pub mod font;

pub use config::{Config, DocumentSource, LogLevel, DEFAULT_COMPILER, DEFAULT_CONVERTER};
pub use context::{RequiredUsage, RunContext};
pub use font::{FontFile, PreparedFont};
