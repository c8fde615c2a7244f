use std::io::Write;
use std::path::{Path, PathBuf};

use icns::{IconFamily, IconType, Image, PixelFormat};

use crate::config::IconConfig;
use crate::error::IconError;
use crate::master::MasterImage;
use crate::utils::file_ops::create_output_file;

pub const ICNS_FILENAME: &str = "icon.icns";

/// ICNS slots and the pixel size each one holds.
const ICNS_SLOTS: &[(IconType, u32)] = &[
    (IconType::RGBA32_16x16, 16),
    (IconType::RGBA32_16x16_2x, 32),
    (IconType::RGBA32_32x32, 32),
    (IconType::RGBA32_32x32_2x, 64),
    (IconType::RGBA32_64x64, 64),
    (IconType::RGBA32_128x128, 128),
    (IconType::RGBA32_128x128_2x, 256),
    (IconType::RGBA32_256x256, 256),
    (IconType::RGBA32_256x256_2x, 512),
    (IconType::RGBA32_512x512, 512),
    (IconType::RGBA32_512x512_2x, 1024),
];

/// Slots filled by an image of `size` pixels.
pub fn slots_for_size(size: u32) -> Vec<IconType> {
    ICNS_SLOTS
        .iter()
        .filter(|(_, px)| *px == size)
        .map(|(icon_type, _)| *icon_type)
        .collect()
}

/// Write `icon.icns`, resizing the master once per configured size and
/// storing the result in every slot of that size.
pub fn emit_macos(
    master: &MasterImage,
    output_dir: &Path,
    config: &IconConfig,
) -> Result<PathBuf, IconError> {
    let icns_path = output_dir.join(ICNS_FILENAME);
    let mut family = IconFamily::new();

    let mut sizes = config.macos_sizes.clone();
    sizes.sort_unstable();
    sizes.dedup();

    for size in sizes {
        let slots = slots_for_size(size);
        if slots.is_empty() {
            return Err(IconError::InvalidConfig(format!(
                "macos size {} has no ICNS slot",
                size
            )));
        }

        let resized = master.resized(size, size, config.filter);
        let image = Image::from_data(PixelFormat::RGBA, size, size, resized.into_raw())
            .map_err(|e| IconError::encode(&icns_path, format!("{0}x{0} image: {1}", size, e)))?;

        for icon_type in slots {
            family.add_icon_with_type(&image, icon_type).map_err(|e| {
                IconError::encode(&icns_path, format!("slot {:?}: {}", icon_type, e))
            })?;
        }
    }

    let mut writer = create_output_file(&icns_path)?;
    family
        .write(&mut writer)
        .map_err(|e| IconError::encode(&icns_path, e))?;
    writer.flush().map_err(|e| IconError::io(&icns_path, e))?;

    log::info!(
        "wrote {} with {} slots",
        icns_path.display(),
        family.available_icons().len()
    );
    Ok(icns_path)
}
