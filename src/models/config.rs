use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;

use crate::cli::Args;
use crate::error::{Error, Result};

/// Default font-metric converter
pub const DEFAULT_CONVERTER: &str = "ttf2tfm";
/// Default PDF compiler
pub const DEFAULT_COMPILER: &str = "pdflatex";

/// Configuration for a single preparation and compile run
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the document text comes from
    pub document: DocumentSource,
    /// Font files to prepare, in the order given
    pub fonts: Vec<PathBuf>,
    /// Overwrite generated files and re-run the converter even if outputs exist
    pub force: bool,
    /// Maximum severity that gets logged
    pub log_level: LogLevel,
    /// Directory that receives generated files and hosts the external tools
    pub work_dir: PathBuf,
    /// Program producing `.tfm` metrics from a TrueType font
    pub converter: String,
    /// Program producing a PDF from the document
    pub compiler: String,
}

/// Source of the document to verify and compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Path(PathBuf),
    Stdin,
}

impl DocumentSource {
    /// Name TeX gives the job, which is also the stem of its auxiliary outputs
    pub fn job_name(&self) -> String {
        match self {
            DocumentSource::Path(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "texput".to_string()),
            DocumentSource::Stdin => "texput".to_string(),
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Path(path) => write!(f, "{}", path.display()),
            DocumentSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Log severities accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Parse a severity name, ignoring case. `WARN` is accepted for `WARNING`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Some(LogLevel::Trace),
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARNING" | "WARN" => Some(LogLevel::Warning),
            "ERROR" => Some(LogLevel::Error),
            "CRITICAL" => Some(LogLevel::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl Config {
    /// Create a configuration with default tools, working in `work_dir`
    pub fn new(document: DocumentSource, fonts: Vec<PathBuf>, work_dir: PathBuf) -> Self {
        Self {
            document,
            fonts,
            force: false,
            log_level: LogLevel::Debug,
            work_dir,
            converter: DEFAULT_CONVERTER.to_string(),
            compiler: DEFAULT_COMPILER.to_string(),
        }
    }

    /// Build a configuration from parsed command-line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        if !args.work_dir.is_dir() {
            return Err(Error::InvalidPath(args.work_dir.clone()));
        }
        if args.converter.trim().is_empty() {
            return Err(Error::Config("converter program must not be empty".to_string()));
        }
        if args.compiler.trim().is_empty() {
            return Err(Error::Config("compiler program must not be empty".to_string()));
        }

        let document = match &args.infile {
            Some(path) if path.as_os_str() != OsStr::new("-") => DocumentSource::Path(path.clone()),
            _ => DocumentSource::Stdin,
        };

        Ok(Config {
            document,
            fonts: args.ttfs.clone(),
            force: args.force,
            log_level: args.loglevel,
            work_dir: args.work_dir.clone(),
            converter: args.converter.clone(),
            compiler: args.compiler.clone(),
        })
    }
}
