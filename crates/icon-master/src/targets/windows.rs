use std::io::Write;
use std::path::{Path, PathBuf};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};

use crate::config::IconConfig;
use crate::error::IconError;
use crate::master::MasterImage;
use crate::targets::SizeSpec;
use crate::utils::file_ops::create_output_file;

pub const ICO_FILENAME: &str = "icon.ico";

/// Write `icon.ico` with one entry per configured size, in configured order.
pub fn emit_windows(
    master: &MasterImage,
    output_dir: &Path,
    config: &IconConfig,
) -> Result<PathBuf, IconError> {
    let ico_path = output_dir.join(ICO_FILENAME);
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for spec in config.windows_sizes.iter().map(|&s| SizeSpec::square(s)) {
        let resized = master.resized(spec.width, spec.height, config.filter);
        let icon_image = IconImage::from_rgba_data(spec.width, spec.height, resized.into_raw());
        let entry = IconDirEntry::encode(&icon_image).map_err(|e| {
            IconError::encode(&ico_path, format!("entry {}x{}: {}", spec.width, spec.height, e))
        })?;
        icon_dir.add_entry(entry);
    }

    let mut writer = create_output_file(&ico_path)?;
    icon_dir
        .write(&mut writer)
        .map_err(|e| IconError::encode(&ico_path, e))?;
    writer.flush().map_err(|e| IconError::io(&ico_path, e))?;

    log::info!(
        "wrote {} with {} entries",
        ico_path.display(),
        icon_dir.entries().len()
    );
    Ok(ico_path)
}
