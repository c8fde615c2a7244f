use std::path::{Path, PathBuf};

use crate::config::IconConfig;
use crate::error::IconError;
use crate::master::MasterImage;
use crate::targets::SizeSpec;
use crate::utils::file_ops::write_png;

/// Directory under the output root holding the PNG tree.
pub const LINUX_DIR: &str = "linux";

/// File name used in every size directory.
pub const ICON_FILENAME: &str = "icon.png";

/// Every size spec of the Linux tree, in emission order.
pub fn linux_specs(config: &IconConfig) -> Result<Vec<SizeSpec>, IconError> {
    let mut specs = Vec::with_capacity(config.linux_sizes.len() * config.linux_scales.len());
    for &base in &config.linux_sizes {
        for &scale in &config.linux_scales {
            let spec = SizeSpec::scaled(base, scale).ok_or_else(|| {
                IconError::InvalidConfig(format!(
                    "linux size {} at {}x overflows",
                    base,
                    scale.factor()
                ))
            })?;
            specs.push(spec);
        }
    }
    Ok(specs)
}

/// Write `linux/{n}x{n}[@2x]/icon.png` for every configured size and scale.
///
/// Returns the written paths in emission order.
pub fn emit_linux(
    master: &MasterImage,
    output_dir: &Path,
    config: &IconConfig,
) -> Result<Vec<PathBuf>, IconError> {
    let linux_dir = output_dir.join(LINUX_DIR);
    let mut written = Vec::new();

    for spec in linux_specs(config)? {
        let pixels = master.resized(spec.width, spec.height, config.filter);
        let path = linux_dir.join(spec.dir_name()).join(ICON_FILENAME);
        write_png(&pixels, &path)?;
        written.push(path);
    }

    log::info!("wrote {} Linux icons to {}", written.len(), linux_dir.display());
    Ok(written)
}
