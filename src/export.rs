//! Raster export: PNG bytes, data URIs, and files on disk.

use crate::config::ExportConfig;
use crate::draw::{CairoSurface, SurfaceError};
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Local;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode canvas: {0}")]
    Encode(#[from] SurfaceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export filename template '{0}' does not produce a usable name")]
    InvalidTemplate(String),
}

/// Encodes the canvas as PNG bytes.
pub fn encode_png(surface: &mut CairoSurface) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    surface.write_png(&mut buffer)?;
    Ok(buffer)
}

/// Encodes the canvas as a `data:image/png;base64,...` URI.
pub fn to_data_uri(surface: &mut CairoSurface) -> Result<String, ExportError> {
    let png = encode_png(surface)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
///
/// # Returns
/// Generated filename with a `.png` extension
pub fn generate_filename(template: &str) -> Result<String, ExportError> {
    let mut stem = String::new();
    write!(stem, "{}", Local::now().format(template))
        .map_err(|_| ExportError::InvalidTemplate(template.to_string()))?;
    let stem = stem.trim();
    if stem.is_empty() {
        return Err(ExportError::InvalidTemplate(template.to_string()));
    }
    Ok(format!("{}.png", stem))
}

/// Directory exports go to when none is configured.
pub fn default_directory() -> PathBuf {
    dirs::picture_dir()
        .map(|dir| dir.join("PaintApp"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Writes the canvas as PNG to an explicit path.
pub fn write_png_file(surface: &mut CairoSurface, path: &Path) -> Result<(), ExportError> {
    let png = encode_png(surface)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }
    fs::write(path, png)?;
    log::info!("Canvas exported to: {}", path.display());
    Ok(())
}

/// Saves the canvas into the configured export directory.
///
/// # Returns
/// Path to the saved file
pub fn save_png(surface: &mut CairoSurface, config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = config.directory.clone().unwrap_or_else(default_directory);
    let directory = ensure_directory_exists(&directory)?;
    let path = directory.join(generate_filename(&config.filename_template)?);
    write_png_file(surface, &path)?;
    Ok(path)
}
