use std::fs;
use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;
use resvg::{tiny_skia, usvg};

use crate::error::IconError;

/// Render an SVG file into a `resolution` x `resolution` RGBA bitmap.
///
/// The drawing keeps its aspect ratio and is centred on a transparent
/// canvas. The output size never depends on the SVG's own viewbox.
pub fn rasterize(path: &Path, resolution: u32) -> Result<RgbaImage, IconError> {
    let data = fs::read(path).map_err(|e| IconError::io(path, e))?;
    render(path, &data, resolution)
}

fn render(path: &Path, data: &[u8], resolution: u32) -> Result<RgbaImage, IconError> {
    let rasterize_err = |reason: String| IconError::Rasterize {
        path: path.to_path_buf(),
        reason,
    };

    let mut opt = usvg::Options {
        resources_dir: path.parent().map(Path::to_path_buf),
        ..usvg::Options::default()
    };
    // Text elements need fonts to render.
    Arc::make_mut(&mut opt.fontdb).load_system_fonts();

    let tree = usvg::Tree::from_data(data, &opt).map_err(|e| rasterize_err(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(resolution, resolution)
        .ok_or_else(|| rasterize_err(format!("cannot allocate {0}x{0} canvas", resolution)))?;

    let svg_size = tree.size();
    let target = resolution as f32;
    let scale = (target / svg_size.width()).min(target / svg_size.height());
    let offset_x = (target - svg_size.width() * scale) / 2.0;
    let offset_y = (target - svg_size.height() * scale) / 2.0;
    let transform =
        tiny_skia::Transform::from_translate(offset_x, offset_y).pre_scale(scale, scale);

    log::debug!(
        "rendering {}x{} svg at {}x{} (scale {:.3})",
        svg_size.width(),
        svg_size.height(),
        resolution,
        resolution,
        scale
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha.
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    RgbaImage::from_raw(resolution, resolution, rgba)
        .ok_or_else(|| rasterize_err("pixel buffer size mismatch".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100">
        <rect width="200" height="100" fill="#ff0000"/>
    </svg>"##;

    #[test]
    fn output_size_ignores_viewbox() {
        let pixels = render(Path::new("wide.svg"), WIDE_SVG.as_bytes(), 64).unwrap();
        assert_eq!(pixels.dimensions(), (64, 64));
    }

    #[test]
    fn wide_drawing_is_centred_with_transparent_margins() {
        let pixels = render(Path::new("wide.svg"), WIDE_SVG.as_bytes(), 64).unwrap();

        // 200x100 scaled to 64x32, placed at y = 16..48.
        assert_eq!(pixels.get_pixel(32, 2)[3], 0);
        assert_eq!(pixels.get_pixel(32, 61)[3], 0);
        assert_eq!(*pixels.get_pixel(32, 32), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn semi_transparent_fill_is_demultiplied() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
            <rect width="4" height="4" fill="#ffffff" fill-opacity="0.5"/>
        </svg>"##;

        let pixels = render(Path::new("half.svg"), svg.as_bytes(), 8).unwrap();
        let pixel = pixels.get_pixel(4, 4);

        assert_eq!(pixel[0], 255);
        assert!(pixel[3] > 120 && pixel[3] < 135);
    }

    #[test]
    fn malformed_svg_is_rasterize_error() {
        let result = render(Path::new("bad.svg"), b"<svg", 16);
        assert!(matches!(result, Err(IconError::Rasterize { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = rasterize(Path::new("/nonexistent/logo.svg"), 16);
        assert!(matches!(result, Err(IconError::Io { .. })));
    }
}
