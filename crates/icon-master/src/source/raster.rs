use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::error::IconError;

/// Decode a raster file into RGBA8.
///
/// The format is sniffed from the file contents, not the extension.
pub fn decode(path: &Path) -> Result<RgbaImage, IconError> {
    let bytes = fs::read(path).map_err(|e| IconError::io(path, e))?;

    let decoded = image::load_from_memory(&bytes).map_err(|e| IconError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    log::debug!("decoded {} as {:?}", path.display(), decoded.color());
    Ok(decoded.into_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use tempfile::tempdir;

    #[test]
    fn decodes_mislabeled_file_by_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("actually_png.jpg");
        RgbaImage::from_pixel(3, 5, Rgba([9, 9, 9, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let pixels = decode(&path).unwrap();

        assert_eq!(pixels.dimensions(), (3, 5));
    }

    #[test]
    fn corrupt_bytes_are_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\nnot really").unwrap();

        assert!(matches!(decode(&path), Err(IconError::Decode { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = decode(Path::new("/nonexistent/input.png"));
        assert!(matches!(result, Err(IconError::Io { .. })));
    }
}
