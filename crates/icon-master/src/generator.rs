use std::path::{Path, PathBuf};

use crate::config::IconConfig;
use crate::error::IconError;
use crate::source;
use crate::targets::{self, TargetBundle, linux::LINUX_DIR};
use crate::utils::file_ops::ensure_dir;

/// Event emitted while generating icons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateEvent {
    /// The master image is smaller than recommended; upscaled icons may look soft.
    LowResolution {
        width: u32,
        height: u32,
        recommended: u32,
    },
    /// A bundle finished. For Linux `path` is the tree root, otherwise the container file.
    BundleWritten { bundle: TargetBundle, path: PathBuf },
}

/// Paths written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub linux_icons: Vec<PathBuf>,
    pub ico: PathBuf,
    pub icns: PathBuf,
}

/// Pick the output directory: the explicit one, or `<source without extension>_icons`.
pub fn resolve_output_dir(source: &Path, output_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = output_dir {
        return dir.to_path_buf();
    }

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{}_icons", stem))
}

/// Generate the Linux, Windows and macOS bundles for `source`.
///
/// Nothing is written until the source has decoded. A failure in a later
/// bundle leaves the earlier bundles on disk.
pub fn generate<F>(
    source: &Path,
    output_dir: Option<&Path>,
    config: &IconConfig,
    mut on_event: F,
) -> Result<GenerationReport, IconError>
where
    F: FnMut(GenerateEvent),
{
    config.validate()?;

    if !source.exists() {
        return Err(IconError::MissingSource(source.to_path_buf()));
    }

    let output_dir = resolve_output_dir(source, output_dir);
    let master = source::load(source, config)?;

    if master.is_below(config.min_recommended_size) {
        log::debug!(
            "master image {}x{} is below {}px",
            master.width(),
            master.height(),
            config.min_recommended_size
        );
        on_event(GenerateEvent::LowResolution {
            width: master.width(),
            height: master.height(),
            recommended: config.min_recommended_size,
        });
    }

    ensure_dir(&output_dir)?;

    let linux_icons = targets::emit_linux(&master, &output_dir, config)?;
    on_event(GenerateEvent::BundleWritten {
        bundle: TargetBundle::Linux,
        path: output_dir.join(LINUX_DIR),
    });

    let ico = targets::emit_windows(&master, &output_dir, config)?;
    on_event(GenerateEvent::BundleWritten {
        bundle: TargetBundle::Windows,
        path: ico.clone(),
    });

    let icns = targets::emit_macos(&master, &output_dir, config)?;
    on_event(GenerateEvent::BundleWritten {
        bundle: TargetBundle::MacOs,
        path: icns.clone(),
    });

    Ok(GenerationReport {
        output_dir,
        linux_icons,
        ico,
        icns,
    })
}
