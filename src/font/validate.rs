use std::fs;
use std::path::Path;

use ttf_parser::{name_id, Face};

use crate::error::Result;

/// What a quick look at a font file's header revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontCheck {
    /// Parses as a TrueType face; carries the family name when the font has one
    TrueType { family: Option<String> },
    /// Not something the metric converter can read
    NotTrueType(String),
}

/// Inspect `path` without trusting its extension.
///
/// CFF-flavoured OpenType fonts are reported as `NotTrueType` because the
/// converter only understands TrueType outlines.
pub fn inspect_font(path: &Path) -> Result<FontCheck> {
    let data = fs::read(path)?;

    let header = data.get(..4).unwrap_or(&[]);
    match header {
        [0x00, 0x01, 0x00, 0x00] | b"true" | b"ttcf" => {}
        b"OTTO" => {
            return Ok(FontCheck::NotTrueType(
                "OpenType font with CFF outlines".to_string(),
            ))
        }
        _ => return Ok(FontCheck::NotTrueType("unknown file signature".to_string())),
    }

    match Face::parse(&data, 0) {
        Ok(face) => {
            let family = face
                .names()
                .into_iter()
                .filter(|name| name.name_id == name_id::FAMILY && name.is_unicode())
                .find_map(|name| name.to_string());
            Ok(FontCheck::TrueType { family })
        }
        Err(err) => Ok(FontCheck::NotTrueType(err.to_string())),
    }
}
