use image::imageops::{self, FilterType};
use image::RgbaImage;

/// The normalized RGBA bitmap every derivative is resampled from.
#[derive(Debug, Clone)]
pub struct MasterImage {
    pixels: RgbaImage,
}

impl MasterImage {
    /// Wrap a decoded bitmap. Returns `None` for an empty image.
    pub fn new(pixels: RgbaImage) -> Option<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return None;
        }
        Some(MasterImage { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// True when either side is below `threshold`.
    pub fn is_below(&self, threshold: u32) -> bool {
        self.width() < threshold || self.height() < threshold
    }

    /// Resample the master to exactly `width` x `height`.
    ///
    /// Always reads from the master buffer. A request for the master's own
    /// size returns a plain copy with no resampling.
    pub fn resized(&self, width: u32, height: u32, filter: FilterType) -> RgbaImage {
        if width == self.width() && height == self.height() {
            return self.pixels.clone();
        }
        log::debug!(
            "resizing {}x{} -> {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        imageops::resize(&self.pixels, width, height, filter)
    }
}
