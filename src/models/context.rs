use std::path::{Path, PathBuf};

/// A line the document has to contain, and the font family that needs it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredUsage {
    pub family: String,
    pub line: String,
}

/// State shared by the stages of one run.
///
/// Owned by the pipeline and passed to each stage in turn. The cleanup
/// registry keeps insertion order; cleanup consumes it exactly once.
#[derive(Debug, Default)]
pub struct RunContext {
    cleanup: Vec<PathBuf>,
    required: Vec<RequiredUsage>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `path` for removal at the end of the run
    pub fn register_cleanup(&mut self, path: impl Into<PathBuf>) {
        self.cleanup.push(path.into());
    }

    /// Record a line the document must contain
    pub fn require(&mut self, family: &str, line: String) {
        self.required.push(RequiredUsage {
            family: family.to_string(),
            line,
        });
    }

    pub fn cleanup_paths(&self) -> &[PathBuf] {
        &self.cleanup
    }

    pub fn required_usage(&self) -> &[RequiredUsage] {
        &self.required
    }

    pub fn is_registered(&self, path: &Path) -> bool {
        self.cleanup.iter().any(|registered| registered == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_keeps_insertion_order() {
        let mut ctx = RunContext::new();
        ctx.register_cleanup("T1-WGL4.enc");
        ctx.register_cleanup("t1myfont.fd");
        ctx.register_cleanup("myfont.tfm");

        assert_eq!(
            ctx.cleanup_paths(),
            &[
                PathBuf::from("T1-WGL4.enc"),
                PathBuf::from("t1myfont.fd"),
                PathBuf::from("myfont.tfm"),
            ]
        );
        assert!(ctx.is_registered(Path::new("t1myfont.fd")));
        assert!(!ctx.is_registered(Path::new("myfont.ttf")));
    }

    #[test]
    fn required_usage_is_recorded_per_family() {
        let mut ctx = RunContext::new();
        ctx.require("myfont", "\\newcommand\\myfont".to_string());
        assert_eq!(ctx.required_usage().len(), 1);
        assert_eq!(ctx.required_usage()[0].family, "myfont");
    }
}
