use std::path::PathBuf;

/// A TrueType font supplied on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    /// Path as given by the caller
    pub original_path: PathBuf,
    /// Current location, after any rename to lowercase
    pub path: PathBuf,
    /// Lowercase file stem, used as the TeX family name
    pub family: String,
    /// File extension without the dot, as found on disk
    pub extension: String,
}

/// Files generated for a font that is ready to use from the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedFont {
    pub font: FontFile,
    /// `t1<family>.fd`
    pub declaration: PathBuf,
    /// `<family>.tfm`
    pub metrics: PathBuf,
    /// Line the document must contain to use the font
    pub usage: String,
}
