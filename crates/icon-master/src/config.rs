//! Size lists and resampling settings for every bundle.

use image::imageops::FilterType;

use crate::error::IconError;
use crate::targets::Scale;
use crate::targets::macos;

/// Base sizes of the Linux hicolor tree.
pub const LINUX_SIZES: &[u32] = &[16, 24, 32, 48, 64, 96, 128, 256, 512];

/// Frames embedded in the Windows ICO, in container order.
pub const WINDOWS_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256];

/// Pixel sizes embedded in the macOS ICNS.
pub const MACOS_SIZES: &[u32] = &[16, 32, 64, 128, 256, 512, 1024];

/// Square resolution SVG input is rendered at.
pub const VECTOR_RESOLUTION: u32 = 1024;

/// Inputs smaller than this on either side trigger a quality warning.
pub const MIN_RECOMMENDED_SIZE: u32 = 512;

/// Largest side, in pixels, of any emitted icon or rendered SVG.
pub const MAX_ICON_SIZE: u32 = 8192;

/// ICO entries cannot exceed 256 pixels per side.
const ICO_MAX_SIZE: u32 = 256;

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct IconConfig {
    pub linux_sizes: Vec<u32>,
    pub linux_scales: Vec<Scale>,
    pub windows_sizes: Vec<u32>,
    pub macos_sizes: Vec<u32>,
    pub filter: FilterType,
    pub vector_resolution: u32,
    pub min_recommended_size: u32,
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            linux_sizes: LINUX_SIZES.to_vec(),
            linux_scales: vec![Scale::X1, Scale::X2],
            windows_sizes: WINDOWS_SIZES.to_vec(),
            macos_sizes: MACOS_SIZES.to_vec(),
            filter: FilterType::Lanczos3,
            vector_resolution: VECTOR_RESOLUTION,
            min_recommended_size: MIN_RECOMMENDED_SIZE,
        }
    }
}

impl IconConfig {
    /// Check the configuration before any file is touched.
    pub fn validate(&self) -> Result<(), IconError> {
        non_empty("linux_sizes", &self.linux_sizes)?;
        non_empty("windows_sizes", &self.windows_sizes)?;
        non_empty("macos_sizes", &self.macos_sizes)?;

        if self.linux_scales.is_empty() {
            return Err(IconError::InvalidConfig("linux_scales is empty".to_string()));
        }

        for &base in &self.linux_sizes {
            for &scale in &self.linux_scales {
                let pixels = base.checked_mul(scale.factor());
                if pixels.is_none_or(|px| px > MAX_ICON_SIZE) {
                    return Err(IconError::InvalidConfig(format!(
                        "linux size {} at {}x exceeds the limit of {} pixels",
                        base,
                        scale.factor(),
                        MAX_ICON_SIZE
                    )));
                }
            }
        }

        if let Some(size) = self.windows_sizes.iter().find(|&&s| s > ICO_MAX_SIZE) {
            return Err(IconError::InvalidConfig(format!(
                "windows size {} exceeds the ICO limit of {}",
                size, ICO_MAX_SIZE
            )));
        }

        if let Some(size) = self
            .macos_sizes
            .iter()
            .find(|&&s| macos::slots_for_size(s).is_empty())
        {
            return Err(IconError::InvalidConfig(format!(
                "macos size {} has no ICNS slot",
                size
            )));
        }

        if self.vector_resolution == 0 || self.vector_resolution > MAX_ICON_SIZE {
            return Err(IconError::InvalidConfig(format!(
                "vector_resolution must be between 1 and {}",
                MAX_ICON_SIZE
            )));
        }

        Ok(())
    }
}

fn non_empty(name: &str, sizes: &[u32]) -> Result<(), IconError> {
    if sizes.is_empty() {
        return Err(IconError::InvalidConfig(format!("{} is empty", name)));
    }
    if sizes.contains(&0) {
        return Err(IconError::InvalidConfig(format!("{} contains a zero size", name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(IconConfig::default().validate().is_ok());
    }

    #[test]
    fn default_lists_match_documented_sets() {
        let config = IconConfig::default();
        assert_eq!(config.linux_sizes, vec![16, 24, 32, 48, 64, 96, 128, 256, 512]);
        assert_eq!(config.windows_sizes, vec![16, 32, 48, 64, 128, 256]);
        assert_eq!(config.linux_scales, vec![Scale::X1, Scale::X2]);
        assert_eq!(config.filter, FilterType::Lanczos3);
        assert_eq!(config.vector_resolution, 1024);
    }

    #[test]
    fn rejects_oversized_windows_frame() {
        let config = IconConfig {
            windows_sizes: vec![16, 512],
            ..IconConfig::default()
        };
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_oversized_linux_size() {
        let overflowing = IconConfig {
            linux_sizes: vec![16, u32::MAX / 2 + 1],
            ..IconConfig::default()
        };
        assert!(matches!(overflowing.validate(), Err(IconError::InvalidConfig(_))));

        let too_large = IconConfig {
            linux_sizes: vec![MAX_ICON_SIZE],
            ..IconConfig::default()
        };
        assert!(matches!(too_large.validate(), Err(IconError::InvalidConfig(_))));

        let at_limit_1x_only = IconConfig {
            linux_sizes: vec![MAX_ICON_SIZE],
            linux_scales: vec![Scale::X1],
            ..IconConfig::default()
        };
        assert!(at_limit_1x_only.validate().is_ok());
    }

    #[test]
    fn rejects_macos_size_without_slot() {
        let config = IconConfig {
            macos_sizes: vec![48],
            ..IconConfig::default()
        };
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_and_zero_sizes() {
        let empty = IconConfig {
            linux_sizes: Vec::new(),
            ..IconConfig::default()
        };
        assert!(empty.validate().is_err());

        let zero = IconConfig {
            windows_sizes: vec![0, 16],
            ..IconConfig::default()
        };
        assert!(zero.validate().is_err());

        let no_scales = IconConfig {
            linux_scales: Vec::new(),
            ..IconConfig::default()
        };
        assert!(no_scales.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_vector_resolution() {
        let zero = IconConfig {
            vector_resolution: 0,
            ..IconConfig::default()
        };
        assert!(zero.validate().is_err());

        let huge = IconConfig {
            vector_resolution: MAX_ICON_SIZE + 1,
            ..IconConfig::default()
        };
        assert!(huge.validate().is_err());
    }
}
