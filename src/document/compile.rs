use tracing::{error, info, warn};

use super::{conflicting_definition, missing_usage, Document};
use crate::error::Result;
use crate::models::{Config, RunContext};
use crate::tools::{ToolOutcome, Toolchain};

/// Compiler outputs removed after the run, when present
pub const AUXILIARY_EXTENSIONS: [&str; 4] = ["aux", "out", "log", "toc"];

/// How the verification and compile stage ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileStatus {
    /// The document lacked a required line, so the compiler was not run
    MissingUsage { line: String },
    /// The compiler ran once; its exit status is informational
    Compiled(ToolOutcome),
}

/// Check the document for every required usage line, then compile it.
///
/// A missing line stops the stage without running the compiler. That is
/// reported through [`CompileStatus`], not as an error.
pub fn compile_document<T: Toolchain>(
    config: &Config,
    toolchain: &mut T,
    ctx: &mut RunContext,
) -> Result<CompileStatus> {
    let document = Document::load(&config.document)?;

    if let Some(usage) = missing_usage(&document.text, ctx.required_usage()) {
        error!("please add '{}' to file {}", usage.line, document.source);
        if let Some(existing) = conflicting_definition(&document.text, &usage.family) {
            warn!("{} already defines \\{} as: {}", document.source, usage.family, existing);
        }
        return Ok(CompileStatus::MissingUsage {
            line: usage.line.clone(),
        });
    }

    info!("running: {} {}", config.compiler, document.source);
    let outcome = toolchain.compile(&document, &config.work_dir)?;
    if !outcome.success() {
        warn!("{} exited with status {:?}", outcome.command_line(), outcome.status);
    }

    let job_name = document.source.job_name();
    for extension in AUXILIARY_EXTENSIONS {
        let path = config.work_dir.join(format!("{}.{}", job_name, extension));
        if path.exists() {
            ctx.register_cleanup(path);
        }
    }

    Ok(CompileStatus::Compiled(outcome))
}
