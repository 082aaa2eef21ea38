//! Loading, verifying and compiling the target document

pub mod compile;
pub mod verify;

use std::fs;
use std::io::{self, Read};

use crate::error::{Error, Result};
use crate::models::DocumentSource;

pub use compile::{compile_document, CompileStatus, AUXILIARY_EXTENSIONS};
pub use verify::{conflicting_definition, missing_usage};

/// The full text of the document, and where it came from
#[derive(Debug, Clone)]
pub struct Document {
    pub source: DocumentSource,
    pub text: String,
}

impl Document {
    /// Read the whole document from a file or from standard input
    pub fn load(source: &DocumentSource) -> Result<Self> {
        let text = match source {
            DocumentSource::Path(path) => fs::read_to_string(path).map_err(|err| {
                Error::Document(format!("cannot read {}: {}", path.display(), err))
            })?,
            DocumentSource::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|err| Error::Document(format!("cannot read <stdin>: {}", err)))?;
                text
            }
        };

        Ok(Self {
            source: source.clone(),
            text,
        })
    }
}
