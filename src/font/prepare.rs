use std::fs;
use std::path::Path;

use tracing::{debug, error, info, warn};

use super::templates::{
    render_family_declaration, render_usage_command, render_usage_example, ENCODING_FILE,
    ENCODING_TABLE,
};
use super::validate::{inspect_font, FontCheck};
use crate::error::Result;
use crate::models::{Config, FontFile, PreparedFont, RunContext};
use crate::tools::Toolchain;
use crate::utils::{
    declaration_file_name, is_control_word, is_lowercase, metrics_file_name, rename_to_lowercase,
    split_font_name, write_if_missing,
};

/// Generate everything TeX needs for each font in `config.fonts`.
///
/// Fonts that are missing, cannot be renamed, or for which the converter
/// produces no metrics are skipped with a warning. Every generated file is
/// registered for cleanup and every usable font adds its usage line to `ctx`.
pub fn prepare_fonts<T: Toolchain>(
    config: &Config,
    toolchain: &mut T,
    ctx: &mut RunContext,
) -> Result<Vec<PreparedFont>> {
    let encoding = config.work_dir.join(ENCODING_FILE);
    write_if_missing(&encoding, ENCODING_TABLE, config.force)?;
    ctx.register_cleanup(&encoding);

    let mut prepared = Vec::new();
    for path in &config.fonts {
        info!("reading {}", path.display());

        let font = match locate_font(path) {
            Some(font) => font,
            None => continue,
        };

        if let Some(ready) = prepare_font(config, toolchain, ctx, font, &encoding)? {
            prepared.push(ready);
        }
    }

    Ok(prepared)
}

/// Resolve a font argument to a file on disk with a lowercase stem
fn locate_font(path: &Path) -> Option<FontFile> {
    if !path.exists() {
        warn!("skipping {}; does not exist", path.display());
        return None;
    }
    if !path.is_file() {
        warn!("skipping {}; not a file", path.display());
        return None;
    }

    let (stem, extension) = match split_font_name(path) {
        Some(parts) => parts,
        None => {
            warn!("skipping {}; not a font file name", path.display());
            return None;
        }
    };

    let current = if is_lowercase(&stem) {
        path.to_path_buf()
    } else {
        match rename_to_lowercase(path, &stem, &extension) {
            Ok(renamed) => {
                warn!("renaming {} to {}", path.display(), renamed.display());
                renamed
            }
            Err(err) => {
                warn!("skipping {}; {}", path.display(), err);
                return None;
            }
        }
    };

    let family = stem.to_lowercase();
    if !is_control_word(&family) {
        warn!(
            "{} contains characters other than letters; \\{} cannot be used as a TeX command",
            family, family
        );
    }

    Some(FontFile {
        original_path: path.to_path_buf(),
        path: current,
        family,
        extension,
    })
}

/// The family declaration names the font without a directory, so pdflatex
/// only finds fonts next to the files it compiles
fn font_outside_work_dir(font: &Path, work_dir: &Path) -> bool {
    let font_dir = match font.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (fs::canonicalize(font_dir), fs::canonicalize(work_dir)) {
        (Ok(font_dir), Ok(work_dir)) => font_dir != work_dir,
        _ => false,
    }
}

fn prepare_font<T: Toolchain>(
    config: &Config,
    toolchain: &mut T,
    ctx: &mut RunContext,
    font: FontFile,
    encoding: &Path,
) -> Result<Option<PreparedFont>> {
    match inspect_font(&font.path) {
        Ok(FontCheck::TrueType { family: Some(name) }) => {
            debug!("{} is a TrueType font of family {}", font.path.display(), name)
        }
        Ok(FontCheck::TrueType { family: None }) => {
            debug!("{} is a TrueType font", font.path.display())
        }
        Ok(FontCheck::NotTrueType(reason)) => warn!(
            "{} does not look like a TrueType font ({}); converting anyway",
            font.path.display(),
            reason
        ),
        Err(err) => warn!("could not inspect {}: {}", font.path.display(), err),
    }

    if font_outside_work_dir(&font.path, &config.work_dir) {
        warn!(
            "{} is outside {}; pdflatex will not find it unless it is on the TTFONTS path",
            font.path.display(),
            config.work_dir.display()
        );
    }

    let declaration = config.work_dir.join(declaration_file_name(&font.family));
    write_if_missing(
        &declaration,
        &render_family_declaration(&font.family),
        config.force,
    )?;
    ctx.register_cleanup(&declaration);

    let metrics_name = metrics_file_name(&font.family);
    let metrics = config.work_dir.join(&metrics_name);
    if !metrics.exists() || config.force {
        match toolchain.convert(&font.path, encoding, &config.work_dir) {
            Ok(outcome) if !outcome.success() => {
                warn!("{} exited with status {:?}", outcome.command_line(), outcome.status)
            }
            Ok(outcome) => debug!("ran {}", outcome.command_line()),
            Err(err) => error!("{}", err),
        }
    }

    if !metrics.exists() {
        warn!("could NOT create {} file", metrics_name);
        return Ok(None);
    }

    ctx.register_cleanup(&metrics);
    info!("created {} file for use.", metrics_name);
    let usage = render_usage_command(&font.family);
    ctx.require(&font.family, usage.clone());
    info!("add: {}", usage);
    info!("then use: {}", render_usage_example(&font.family));

    Ok(Some(PreparedFont {
        font,
        declaration,
        metrics,
        usage,
    }))
}
