use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ToolOutcome, Toolchain};
use crate::document::Document;
use crate::error::Result;
use crate::utils::metrics_file_name;

/// One call made against a [`RecordingToolchain`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Convert { font: PathBuf, encoding: PathBuf },
    Compile { document: String },
}

/// In-process stand-in for the external tools, for unit tests.
///
/// Records every call. `convert` writes an empty `<stem>.tfm` into the
/// working directory unless the font's family is listed as failing.
#[derive(Debug, Default)]
pub struct RecordingToolchain {
    pub calls: Vec<Invocation>,
    failing: HashSet<String>,
    compile_status: i32,
}

impl RecordingToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `convert` produce nothing for `family`
    pub fn failing_for(mut self, family: &str) -> Self {
        self.failing.insert(family.to_string());
        self
    }

    /// Exit code reported by `compile`
    pub fn with_compile_status(mut self, status: i32) -> Self {
        self.compile_status = status;
        self
    }

    pub fn conversions(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Invocation::Convert { .. }))
            .count()
    }

    pub fn compilations(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Invocation::Compile { document } => Some(document.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Toolchain for RecordingToolchain {
    fn convert(&mut self, font: &Path, encoding: &Path, work_dir: &Path) -> Result<ToolOutcome> {
        self.calls.push(Invocation::Convert {
            font: font.to_path_buf(),
            encoding: encoding.to_path_buf(),
        });

        let family = font
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let status = if self.failing.contains(&family) {
            1
        } else {
            fs::write(work_dir.join(metrics_file_name(&family)), b"")?;
            0
        };

        Ok(ToolOutcome {
            program: "ttf2tfm".to_string(),
            args: vec![font.display().to_string()],
            status: Some(status),
        })
    }

    fn compile(&mut self, document: &Document, _work_dir: &Path) -> Result<ToolOutcome> {
        let name = document.source.to_string();
        self.calls.push(Invocation::Compile {
            document: name.clone(),
        });

        Ok(ToolOutcome {
            program: "pdflatex".to_string(),
            args: vec![name],
            status: Some(self.compile_status),
        })
    }
}
