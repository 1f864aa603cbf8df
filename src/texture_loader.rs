use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;

/// Collects the image files of a directory, sorted by file name, so track
/// contents are stable between runs.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read image directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());
        if matches!(ext.as_deref(), Some("png" | "jpg" | "jpeg" | "bmp" | "gif")) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("no image files found in {}", dir.display());
    }
    Ok(paths)
}

/// EXIF orientation tag, when one is present and readable. Only JPEGs carry
/// it reliably; anything else reports the identity orientation.
fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    if !matches!(ext.as_deref(), Some("jpg" | "jpeg")) {
        return 1;
    }

    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY) {
            Some(field) => match &field.value {
                Value::Short(values) if !values.is_empty() => values[0],
                _ => 1,
            },
            None => 1,
        },
        Err(e) => {
            eprintln!("warning: could not read EXIF data for {}: {e}", path.display());
            1
        }
    }
}

/// Loads an image from disk, bakes its EXIF rotation into the pixels, and
/// uploads it as a texture.
pub fn load_texture_with_orientation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read file {}", path.display()))?;
    let orientation = exif_orientation(path, &bytes);

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let mut image = Image::load_image_from_mem(&format!(".{ext}"), &bytes)
        .map_err(|e| anyhow!("failed to decode image {}: {e}", path.display()))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; mirrored variants are
    // rare enough to ignore.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {e}", path.display()))
}
