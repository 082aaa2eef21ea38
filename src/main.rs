use std::process;

use clap::Parser;
use tracing::info;

use ttf2tex::cli::Args;
use ttf2tex::document::CompileStatus;
use ttf2tex::error::Result;
use ttf2tex::models::Config;
use ttf2tex::tools::ShellToolchain;
use ttf2tex::utils::init_logging;

fn run(args: &Args) -> Result<()> {
    let config = Config::from_args(args)?;
    init_logging(config.log_level)?;

    let mut toolchain = ShellToolchain::from_config(&config);
    let report = ttf2tex::run(&config, &mut toolchain)?;

    match &report.compile {
        CompileStatus::Compiled(outcome) => info!(
            "{} font(s) prepared, {} finished with status {:?}",
            report.fonts.len(),
            outcome.program,
            outcome.status
        ),
        CompileStatus::MissingUsage { .. } => {
            info!("{} font(s) prepared, document not compiled", report.fonts.len())
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
