//! Platform icon bundles.

pub mod linux;
pub mod macos;
pub mod windows;

pub use linux::emit_linux;
pub use macos::emit_macos;
pub use windows::emit_windows;

/// The platform-specific artifact produced from one master image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetBundle {
    Linux,
    Windows,
    MacOs,
}

/// Pixel density of a Linux icon directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    X1,
    X2,
}

impl Scale {
    pub fn factor(self) -> u32 {
        match self {
            Scale::X1 => 1,
            Scale::X2 => 2,
        }
    }
}

/// One resize target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub width: u32,
    pub height: u32,
    /// Logical size the directory is named after.
    pub base: u32,
    pub scale: Scale,
}

impl SizeSpec {
    /// A square target at 1x.
    pub fn square(size: u32) -> Self {
        SizeSpec {
            width: size,
            height: size,
            base: size,
            scale: Scale::X1,
        }
    }

    /// A square target for `base` rendered at `scale`.
    ///
    /// Returns `None` when the pixel size does not fit in a `u32`.
    pub fn scaled(base: u32, scale: Scale) -> Option<Self> {
        let size = base.checked_mul(scale.factor())?;
        Some(SizeSpec {
            width: size,
            height: size,
            base,
            scale,
        })
    }

    /// Directory name in the hicolor layout, e.g. `32x32` or `32x32@2x`.
    pub fn dir_name(&self) -> String {
        match self.scale {
            Scale::X1 => format!("{0}x{0}", self.base),
            Scale::X2 => format!("{0}x{0}@2x", self.base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_spec_multiplies_pixels_not_label() {
        let spec = SizeSpec::scaled(32, Scale::X2).unwrap();
        assert_eq!((spec.width, spec.height), (64, 64));
        assert_eq!(spec.base, 32);
        assert_eq!(spec.dir_name(), "32x32@2x");
    }

    #[test]
    fn square_spec_is_1x() {
        let spec = SizeSpec::square(48);
        assert_eq!((spec.width, spec.height), (48, 48));
        assert_eq!(spec.dir_name(), "48x48");
    }

    #[test]
    fn scaled_spec_overflow_is_none() {
        assert!(SizeSpec::scaled(u32::MAX / 2 + 1, Scale::X2).is_none());
        assert!(SizeSpec::scaled(u32::MAX, Scale::X1).is_some());
    }
}
