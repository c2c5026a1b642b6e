//! Glyph pool loading and shape/background partitioning
//!
//! Loads every image in the source directory as a normalized square
//! grayscale surface. Glyphs whose file stem carries the configured empty
//! marker tile the mosaic like any other glyph but are excluded from the
//! reference-shape pool.

use crate::io::configuration::EMPTY_GLYPH_STEM;
use crate::io::error::{PipelineError, Result};
use crate::io::image::load_surface;
use crate::raster::Surface;
use log::info;
use rand::{Rng, rngs::StdRng};
use std::path::{Path, PathBuf};

/// Pool of normalized glyph surfaces partitioned into shapes and backgrounds
pub struct GlyphPool {
    glyphs: Vec<Surface>,
    shape_indices: Vec<usize>,
    side: usize,
}

impl GlyphPool {
    /// Load every glyph image in the given directory, in sorted file order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory is missing, unreadable, or holds no files
    /// - Any file fails to decode, is not square, or differs in side length
    ///   from the rest of the pool
    /// - No glyph remains after excluding the background glyphs
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            return Err(PipelineError::SourceDirMissing {
                path: dir.to_path_buf(),
            });
        }

        let mut files: Vec<PathBuf> = Vec::new();
        let entries = std::fs::read_dir(dir).map_err(|e| PipelineError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read directory",
            source: e,
        })?;
        for entry in entries {
            let path = entry
                .map_err(|e| PipelineError::FileSystem {
                    path: dir.to_path_buf(),
                    operation: "read directory entry",
                    source: e,
                })?
                .path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        if files.is_empty() {
            return Err(PipelineError::SourceDirEmpty {
                path: dir.to_path_buf(),
            });
        }

        let mut glyphs = Vec::with_capacity(files.len());
        let mut shape_indices = Vec::new();
        let mut side = None;

        for path in &files {
            info!("loading glyph {}", path.display());
            let glyph = load_surface(path)?;

            match side {
                None => side = Some(glyph.side()),
                Some(expected) if expected != glyph.side() => {
                    return Err(PipelineError::GlyphSizeMismatch {
                        path: path.clone(),
                        expected,
                        actual: glyph.side(),
                    });
                }
                Some(_) => {}
            }

            let is_background = path
                .file_stem()
                .is_some_and(|stem| stem.to_string_lossy().contains(EMPTY_GLYPH_STEM));
            if !is_background {
                shape_indices.push(glyphs.len());
            }
            glyphs.push(glyph);
        }

        if shape_indices.is_empty() {
            return Err(PipelineError::NoShapeGlyphs {
                path: dir.to_path_buf(),
            });
        }

        info!("glyph pool loaded: {} glyphs", glyphs.len());
        Ok(Self {
            glyphs,
            shape_indices,
            side: side.unwrap_or(0),
        })
    }

    /// Build a pool directly from surfaces; backgrounds are flagged by index
    ///
    /// All surfaces must share one side length. Intended for tests and
    /// programmatic corpus construction where the inputs are known square.
    pub fn from_surfaces(glyphs: Vec<Surface>, background_indices: &[usize]) -> Self {
        let side = glyphs.first().map_or(0, Surface::side);
        let shape_indices = (0..glyphs.len())
            .filter(|index| !background_indices.contains(index))
            .collect();
        Self {
            glyphs,
            shape_indices,
            side,
        }
    }

    /// Shared side length of every glyph in the pool
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Number of glyphs, background glyphs included
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check whether the pool holds no glyphs
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Number of glyphs eligible as the reference shape
    pub fn shape_count(&self) -> usize {
        self.shape_indices.len()
    }

    /// Uniformly random glyph from the whole pool
    pub fn random_glyph(&self, rng: &mut StdRng) -> Option<&Surface> {
        if self.glyphs.is_empty() {
            return None;
        }
        self.glyphs.get(rng.random_range(0..self.glyphs.len()))
    }

    /// Uniformly random glyph from the shape partition
    pub fn random_shape(&self, rng: &mut StdRng) -> Option<&Surface> {
        if self.shape_indices.is_empty() {
            return None;
        }
        self.shape_indices
            .get(rng.random_range(0..self.shape_indices.len()))
            .and_then(|&index| self.glyphs.get(index))
    }
}
