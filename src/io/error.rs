//! Error types for pipeline operations
//!
//! Fatal input errors (non-square glyphs, missing or empty glyph
//! directories, tile grids that do not divide the mosaic) propagate
//! immediately and abort the run. Lattice inference failure is not an
//! error value; it is the `None` arm of the inference result.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum PipelineError {
    /// Failed to load a glyph or surface image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a surface to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Glyph image is not square
    NonSquareGlyph {
        /// Path to the offending glyph
        path: PathBuf,
        /// Decoded width in pixels
        width: u32,
        /// Decoded height in pixels
        height: u32,
    },

    /// Glyph source directory does not exist
    SourceDirMissing {
        /// The missing directory
        path: PathBuf,
    },

    /// Glyph source directory contains no files
    SourceDirEmpty {
        /// The empty directory
        path: PathBuf,
    },

    /// Every glyph in the pool is a background glyph
    NoShapeGlyphs {
        /// The directory the pool was loaded from
        path: PathBuf,
    },

    /// Glyph side length differs from the rest of the pool
    GlyphSizeMismatch {
        /// Path to the offending glyph
        path: PathBuf,
        /// Side length established by the first glyph
        expected: usize,
        /// Side length of the offending glyph
        actual: usize,
    },

    /// Tile count does not evenly divide the surface side
    TileMismatch {
        /// Surface side length in pixels
        surface: usize,
        /// Requested tiles per side
        tiles: usize,
    },

    /// Pipeline parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Internal computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::NonSquareGlyph {
                path,
                width,
                height,
            } => {
                write!(
                    f,
                    "Glyph '{}' is {width}x{height}; glyphs must be square",
                    path.display()
                )
            }
            Self::SourceDirMissing { path } => {
                write!(f, "Glyph directory '{}' does not exist", path.display())
            }
            Self::SourceDirEmpty { path } => {
                write!(f, "Glyph directory '{}' contains no files", path.display())
            }
            Self::NoShapeGlyphs { path } => {
                write!(
                    f,
                    "Glyph directory '{}' holds only background glyphs; at least one shape glyph is required",
                    path.display()
                )
            }
            Self::GlyphSizeMismatch {
                path,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Glyph '{}' has side {actual} but the pool side is {expected}",
                    path.display()
                )
            }
            Self::TileMismatch { surface, tiles } => {
                write!(
                    f,
                    "Tile count {tiles} does not evenly divide surface side {surface}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, PipelineError>;

impl From<image::ImageError> for PipelineError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PipelineError {
    PipelineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PipelineError {
    PipelineError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
