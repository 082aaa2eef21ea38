use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use super::{ToolOutcome, Toolchain};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::models::{Config, DocumentSource};

/// Runs the configured programs as child processes, blocking until they exit
#[derive(Debug, Clone)]
pub struct ShellToolchain {
    converter: String,
    compiler: String,
}

impl ShellToolchain {
    pub fn new(converter: impl Into<String>, compiler: impl Into<String>) -> Self {
        Self {
            converter: converter.into(),
            compiler: compiler.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.converter.clone(), config.compiler.clone())
    }

    fn launch_error(program: &str, source: std::io::Error) -> Error {
        Error::Tool {
            program: program.to_string(),
            source,
        }
    }
}

/// Tools run inside the working directory, so relative inputs must be resolved first
fn absolute(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

impl Toolchain for ShellToolchain {
    fn convert(&mut self, font: &Path, encoding: &Path, work_dir: &Path) -> Result<ToolOutcome> {
        let args = vec![absolute(font), "-p".to_string(), absolute(encoding)];
        debug!("spawning {} in {}", self.converter, work_dir.display());

        // stdin may still hold the document, which is read after conversion
        let status = Command::new(&self.converter)
            .args(&args)
            .current_dir(work_dir)
            .stdin(Stdio::null())
            .status()
            .map_err(|err| Self::launch_error(&self.converter, err))?;

        Ok(ToolOutcome {
            program: self.converter.clone(),
            args,
            status: status.code(),
        })
    }

    fn compile(&mut self, document: &Document, work_dir: &Path) -> Result<ToolOutcome> {
        debug!("spawning {} in {}", self.compiler, work_dir.display());

        match &document.source {
            DocumentSource::Path(path) => {
                let args = vec![absolute(path)];
                let status = Command::new(&self.compiler)
                    .args(&args)
                    .current_dir(work_dir)
                    .status()
                    .map_err(|err| Self::launch_error(&self.compiler, err))?;

                Ok(ToolOutcome {
                    program: self.compiler.clone(),
                    args,
                    status: status.code(),
                })
            }
            DocumentSource::Stdin => {
                // TeX reads the document from its own stdin and names the job `texput`
                let mut child = Command::new(&self.compiler)
                    .current_dir(work_dir)
                    .stdin(Stdio::piped())
                    .spawn()
                    .map_err(|err| Self::launch_error(&self.compiler, err))?;

                if let Some(mut stdin) = child.stdin.take() {
                    match stdin.write_all(document.text.as_bytes()) {
                        // compiler stopped reading early; its exit status tells the rest
                        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
                        other => other?,
                    }
                }
                let status = child.wait()?;

                Ok(ToolOutcome {
                    program: self.compiler.clone(),
                    args: Vec::new(),
                    status: status.code(),
                })
            }
        }
    }
}
