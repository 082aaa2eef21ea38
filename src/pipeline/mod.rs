//! The full run: prepare fonts, verify and compile the document, clean up

pub mod cleanup;

use tracing::info;

use crate::document::{compile_document, CompileStatus};
use crate::error::Result;
use crate::font::prepare_fonts;
use crate::models::{Config, PreparedFont, RunContext};
use crate::tools::Toolchain;

pub use cleanup::{cleanup, CleanupSummary, PROTECTED_EXTENSIONS};

/// Everything a finished run did
#[derive(Debug, Clone)]
pub struct RunReport {
    pub fonts: Vec<PreparedFont>,
    pub compile: CompileStatus,
    pub cleanup: CleanupSummary,
}

/// Run every stage in order. Cleanup always runs; the first error from the
/// earlier stages is returned after it.
pub fn run<T: Toolchain>(config: &Config, toolchain: &mut T) -> Result<RunReport> {
    let mut ctx = RunContext::new();

    let stages = run_stages(config, toolchain, &mut ctx);
    let summary = cleanup(&ctx);
    info!(
        "cleanup removed {} file(s), kept {}",
        summary.removed.len(),
        summary.preserved.len()
    );

    let (fonts, compile) = stages?;
    Ok(RunReport {
        fonts,
        compile,
        cleanup: summary,
    })
}

fn run_stages<T: Toolchain>(
    config: &Config,
    toolchain: &mut T,
    ctx: &mut RunContext,
) -> Result<(Vec<PreparedFont>, CompileStatus)> {
    let fonts = prepare_fonts(config, toolchain, ctx)?;
    let compile = compile_document(config, toolchain, ctx)?;
    Ok((fonts, compile))
}
