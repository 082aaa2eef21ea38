//! External converter and compiler invocation

#[cfg(test)]
pub mod recording;
pub mod shell;

use std::path::Path;

use crate::document::Document;
use crate::error::Result;

#[cfg(test)]
pub use recording::{Invocation, RecordingToolchain};
pub use shell::ShellToolchain;

/// What happened when an external tool ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    pub program: String,
    pub args: Vec<String>,
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
}

impl ToolOutcome {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// The command line, for logging
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// The two external programs a run depends on.
///
/// Both are attempted exactly once per call. An `Err` means the program could
/// not be launched at all; a non-zero exit is reported through [`ToolOutcome`].
pub trait Toolchain {
    /// Produce `<family>.tfm` in `work_dir` from `font`, using `encoding`
    fn convert(&mut self, font: &Path, encoding: &Path, work_dir: &Path) -> Result<ToolOutcome>;

    /// Compile `document` to PDF inside `work_dir`
    fn compile(&mut self, document: &Document, work_dir: &Path) -> Result<ToolOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_joins_arguments() {
        let outcome = ToolOutcome {
            program: "ttf2tfm".to_string(),
            args: vec!["myfont.ttf".to_string(), "-p".to_string(), "T1-WGL4.enc".to_string()],
            status: Some(0),
        };
        assert_eq!(outcome.command_line(), "ttf2tfm myfont.ttf -p T1-WGL4.enc");
        assert!(outcome.success());
    }

    #[test]
    fn signal_termination_is_not_success() {
        let outcome = ToolOutcome {
            program: "pdflatex".to_string(),
            args: Vec::new(),
            status: None,
        };
        assert!(!outcome.success());
    }
}
