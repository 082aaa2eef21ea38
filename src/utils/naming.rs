use std::path::Path;

/// Split a font path into its file stem and extension (without the dot).
///
/// Returns `None` when the path has no usable file name.
pub fn split_font_name(path: &Path) -> Option<(String, String)> {
    let stem = path.file_stem()?.to_str()?.to_string();
    if stem.is_empty() {
        return None;
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_string();
    Some((stem, extension))
}

/// Whether `name` is already in the lowercase form TeX family names use
pub fn is_lowercase(name: &str) -> bool {
    name == name.to_lowercase()
}

/// Whether `name` can follow a backslash as a TeX control word (letters only)
pub fn is_control_word(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// File name for a font after lowercasing its stem; the extension is kept as is
pub fn lowercase_file_name(stem: &str, extension: &str) -> String {
    if extension.is_empty() {
        stem.to_lowercase()
    } else {
        format!("{}.{}", stem.to_lowercase(), extension)
    }
}

/// Name of the font-family declaration file for `family`
pub fn declaration_file_name(family: &str) -> String {
    format!("t1{}.fd", family)
}

/// Name of the metrics file the converter produces for `family`
pub fn metrics_file_name(family: &str) -> String {
    format!("{}.tfm", family)
}

/// Whether the extension of `path` matches one of `extensions`, ignoring case
pub fn has_extension_in(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            extensions.iter().any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_stem_and_extension() {
        assert_eq!(
            split_font_name(Path::new("fonts/MyFont.ttf")),
            Some(("MyFont".to_string(), "ttf".to_string()))
        );
        assert_eq!(
            split_font_name(Path::new("plain")),
            Some(("plain".to_string(), String::new()))
        );
        assert_eq!(split_font_name(Path::new("/")), None);
    }

    #[test]
    fn lowercases_only_the_stem() {
        assert!(!is_lowercase("MyFont"));
        assert!(is_lowercase("myfont"));
        assert_eq!(lowercase_file_name("MyFont", "TTF"), "myfont.TTF");
        assert_eq!(lowercase_file_name("MyFont", ""), "myfont");
    }

    #[test]
    fn control_words_are_letters_only() {
        assert!(is_control_word("myfont"));
        assert!(!is_control_word("font2"));
        assert!(!is_control_word("my-font"));
        assert!(!is_control_word(""));
    }

    #[test]
    fn generated_names_follow_family() {
        assert_eq!(declaration_file_name("myfont"), "t1myfont.fd");
        assert_eq!(metrics_file_name("myfont"), "myfont.tfm");
    }

    #[test]
    fn extension_match_ignores_case() {
        let protected = ["tex", "png", "ttf"];
        assert!(has_extension_in(Path::new("Font.TTF"), &protected));
        assert!(has_extension_in(Path::new("doc.tex"), &protected));
        assert!(!has_extension_in(Path::new("doc.aux"), &protected));
        assert!(!has_extension_in(Path::new("Makefile"), &protected));
    }
}
