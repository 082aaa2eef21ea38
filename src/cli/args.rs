use std::path::PathBuf;

use clap::Parser;

use crate::models::{LogLevel, DEFAULT_COMPILER, DEFAULT_CONVERTER};

/// Arguments the user can give when preparing fonts and compiling a document
#[derive(Parser, Debug)]
#[command(
    name = "ttf2tex",
    version,
    about = "Convert TrueType fonts for TeX and compile a LaTeX document to PDF"
)]
pub struct Args {
    /// LaTeX document to compile; reads standard input when omitted or `-`
    pub infile: Option<PathBuf>,

    /// TrueType fonts to prepare
    #[arg(long, num_args = 0.., value_name = "TTF")]
    pub ttfs: Vec<PathBuf>,

    /// Overwrite generated files even if they already exist
    #[arg(long, default_value_t = false)]
    pub force: bool,

    /// One of: DEBUG, INFO, WARNING, ERROR, CRITICAL
    #[arg(long, default_value = "DEBUG", value_parser = parse_log_level)]
    pub loglevel: LogLevel,

    /// Directory where generated files are written and the tools run
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub work_dir: PathBuf,

    /// Program converting a TrueType font into TeX metrics
    #[arg(long, default_value = DEFAULT_CONVERTER, value_name = "PROGRAM")]
    pub converter: String,

    /// Program compiling the document into a PDF
    #[arg(long, default_value = DEFAULT_COMPILER, value_name = "PROGRAM")]
    pub compiler: String,
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| {
        format!(
            "unknown log level \"{}\": expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL",
            s
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttfs_take_several_values() {
        let args = Args::parse_from(["ttf2tex", "doc.tex", "--ttfs", "A.ttf", "b.ttf"]);
        assert_eq!(args.infile, Some(PathBuf::from("doc.tex")));
        assert_eq!(args.ttfs, vec![PathBuf::from("A.ttf"), PathBuf::from("b.ttf")]);
    }

    #[test]
    fn loglevel_is_validated() {
        let args = Args::parse_from(["ttf2tex", "--loglevel", "warning"]);
        assert_eq!(args.loglevel, LogLevel::Warning);
        assert!(Args::try_parse_from(["ttf2tex", "--loglevel", "chatty"]).is_err());
    }

    #[test]
    fn defaults_point_at_standard_tools() {
        let args = Args::parse_from(["ttf2tex"]);
        assert_eq!(args.converter, "ttf2tfm");
        assert_eq!(args.compiler, "pdflatex");
        assert_eq!(args.work_dir, PathBuf::from("."));
        assert!(args.ttfs.is_empty());
    }
}
