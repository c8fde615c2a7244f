//! Loading the master image.
//!
//! Input is dispatched on its kind: raster files go through the image codec,
//! SVG files are rendered at a fixed resolution first. Both paths end in the
//! same RGBA `MasterImage`.

mod raster;
mod vector;

use std::path::Path;

use crate::config::IconConfig;
use crate::error::IconError;
use crate::master::MasterImage;

/// Raster extensions accepted on input. The bytes are sniffed on decode, so
/// the extension only gates what is allowed in.
const RASTER_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "tif", "tiff", "webp", "avif", "pdf", "bmp",
];

/// How an input file is turned into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Raster,
    Vector,
}

impl InputKind {
    /// Classify a path by its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<InputKind, IconError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let kind = match extension.as_str() {
            "svg" => InputKind::Vector,
            ext if RASTER_EXTENSIONS.contains(&ext) => InputKind::Raster,
            _ => {
                return Err(IconError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    extension,
                });
            }
        };

        Ok(kind)
    }
}

/// Load `path` and normalize it to an RGBA master image.
pub fn load(path: &Path, config: &IconConfig) -> Result<MasterImage, IconError> {
    let kind = InputKind::from_path(path)?;
    log::debug!("loading {} as {:?}", path.display(), kind);

    let pixels = match kind {
        InputKind::Raster => raster::decode(path)?,
        InputKind::Vector => vector::rasterize(path, config.vector_resolution)?,
    };

    let master = MasterImage::new(pixels).ok_or_else(|| IconError::Rasterize {
        path: path.to_path_buf(),
        reason: "image has no pixels".to_string(),
    })?;

    log::info!(
        "loaded master image {}x{} from {}",
        master.width(),
        master.height(),
        path.display()
    );
    Ok(master)
}
