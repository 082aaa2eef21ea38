use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Write `contents` to `path` unless the file exists and `force` is off.
///
/// Returns whether the file was written.
pub fn write_if_missing(path: &Path, contents: &str, force: bool) -> Result<bool> {
    if path.exists() && !force {
        debug!("keeping existing {}", path.display());
        return Ok(false);
    }
    debug!("writing {}", path.display());
    fs::write(path, contents)?;
    Ok(true)
}

/// Rename a file in place so its stem is lowercase, keeping its extension.
///
/// Refuses to replace a different file that already has the lowercase name.
pub fn rename_to_lowercase(path: &Path, stem: &str, extension: &str) -> Result<PathBuf> {
    let file_name = crate::utils::naming::lowercase_file_name(stem, extension);
    let target = match path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    };

    if target.exists() && !same_file(path, &target)? {
        return Err(Error::Font(format!(
            "cannot rename {} to {}: target already exists",
            path.display(),
            target.display()
        )));
    }

    fs::rename(path, &target)?;
    Ok(target)
}

/// On case-insensitive file systems both spellings resolve to one file
fn same_file(a: &Path, b: &Path) -> Result<bool> {
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}

/// Remove a file, treating an already missing file as done.
///
/// Returns whether a file was removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn existing_file_is_kept_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("T1-WGL4.enc");
        fs::write(&path, "custom").unwrap();

        assert!(!write_if_missing(&path, "template", false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom");

        assert!(write_if_missing(&path, "template", true).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "template");
    }

    #[test]
    fn missing_file_is_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t1myfont.fd");
        assert!(write_if_missing(&path, "fd", false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "fd");
    }

    #[test]
    fn rename_lowercases_stem_in_same_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("MyFont.ttf");
        fs::write(&path, b"font").unwrap();

        let renamed = rename_to_lowercase(&path, "MyFont", "ttf").unwrap();
        assert_eq!(renamed, dir.path().join("myfont.ttf"));
        assert!(renamed.exists());
        assert_eq!(fs::read(&renamed).unwrap(), b"font");
    }

    #[test]
    fn removing_missing_file_is_a_no_op() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.aux");
        assert!(!remove_file_if_exists(&path).unwrap());

        fs::write(&path, "").unwrap();
        assert!(remove_file_if_exists(&path).unwrap());
        assert!(!path.exists());
    }
}
