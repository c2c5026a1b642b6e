//! PNG decode/encode bridge between disk images and surfaces

use crate::io::error::{PipelineError, Result, computation_error};
use crate::raster::Surface;
use image::GrayImage;
use std::path::Path;

/// Load an image file as a normalized grayscale surface
///
/// Any format the `image` crate decodes is accepted; pixels are converted
/// to 8-bit grayscale.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded image is not square
pub fn load_surface(path: &Path) -> Result<Surface> {
    let decoded = image::open(path).map_err(|e| PipelineError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let gray = decoded.to_luma8();
    let (width, height) = gray.dimensions();
    if width != height {
        return Err(PipelineError::NonSquareGlyph {
            path: path.to_path_buf(),
            width,
            height,
        });
    }

    Surface::from_pixels(width as usize, gray.into_raw())
        .ok_or_else(|| computation_error("load_surface", &"decoded buffer size mismatch"))
}

/// Save a surface as an 8-bit grayscale PNG
///
/// The parent directory is created when it does not exist yet.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_surface(surface: &Surface, path: &Path) -> Result<()> {
    let side = surface.side() as u32;
    let raw: Vec<u8> = surface.pixels().map(|(_, value)| value).collect();
    let gray = GrayImage::from_raw(side, side, raw)
        .ok_or_else(|| computation_error("save_surface", &"surface buffer size mismatch"))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PipelineError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    gray.save(path).map_err(|e| PipelineError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
