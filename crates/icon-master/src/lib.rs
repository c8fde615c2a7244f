//! Generate platform icon bundles from one master image.
//!
//! The master (PNG, JPEG, TIFF, WebP, AVIF, BMP or SVG) is normalized to
//! RGBA once, then resampled into:
//! - a `linux/` hicolor-style PNG tree at 1x and 2x
//! - a multi-resolution `icon.ico` for Windows
//! - a multi-resolution `icon.icns` for macOS

pub mod config;
mod error;
pub mod generator;
pub mod master;
pub mod source;
pub mod targets;
mod utils;

pub use config::IconConfig;
pub use error::IconError;
pub use generator::{GenerateEvent, GenerationReport, generate, resolve_output_dir};
pub use master::MasterImage;
pub use targets::{Scale, SizeSpec, TargetBundle};
