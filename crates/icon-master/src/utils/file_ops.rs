use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::IconError;

/// Create a directory and all of its parents.
pub fn ensure_dir(dir: &Path) -> Result<(), IconError> {
    fs::create_dir_all(dir).map_err(|e| IconError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Create (or truncate) an output file, creating its parent directory first.
pub fn create_output_file(path: &Path) -> Result<BufWriter<File>, IconError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let file = File::create(path).map_err(|e| IconError::io(path, e))?;
    Ok(BufWriter::new(file))
}

/// Encode an RGBA bitmap as PNG at `path`.
pub fn write_png(pixels: &RgbaImage, path: &Path) -> Result<(), IconError> {
    let mut writer = create_output_file(path)?;
    pixels
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| IconError::encode(path, e))?;
    writer.flush().map_err(|e| IconError::io(path, e))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
