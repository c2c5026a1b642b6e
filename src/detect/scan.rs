//! Tile-grid scanning and detection marking
//!
//! A surface is conceptually partitioned into an N x N grid of equal
//! square tiles. Scanning visits tiles row-major, scores each against the
//! reference shape, and records the tiles meeting the acceptance
//! threshold. Marking is separate so callers can score one surface and
//! outline the hits on another.

use crate::detect::score::match_score;
use crate::io::error::{PipelineError, Result, invalid_parameter};
use crate::raster::Surface;
use crate::raster::surface::BLACK;

/// Uniform N x N tiling of a square surface
#[derive(Clone, Copy, Debug)]
pub struct TilingGrid {
    tiles_per_side: usize,
    tile_side: usize,
}

impl TilingGrid {
    /// Build the tiling for a surface side and tile count
    ///
    /// # Errors
    ///
    /// Returns an error if `tiles_per_side` is zero, or when it does not
    /// evenly divide the surface side (a fatal configuration error).
    pub fn new(surface_side: usize, tiles_per_side: usize) -> Result<Self> {
        if tiles_per_side == 0 {
            return Err(invalid_parameter(
                "tiles",
                &tiles_per_side,
                &"at least one tile per side is required",
            ));
        }
        if surface_side == 0 || !surface_side.is_multiple_of(tiles_per_side) {
            return Err(PipelineError::TileMismatch {
                surface: surface_side,
                tiles: tiles_per_side,
            });
        }
        Ok(Self {
            tiles_per_side,
            tile_side: surface_side / tiles_per_side,
        })
    }

    /// Tiles along one side of the grid
    pub const fn tiles_per_side(&self) -> usize {
        self.tiles_per_side
    }

    /// Side length of one tile in pixels
    pub const fn tile_side(&self) -> usize {
        self.tile_side
    }
}

/// A tile accepted by the detector
#[derive(Clone, Copy, Debug)]
pub struct TileHit {
    /// Grid row of the accepted tile
    pub row: usize,
    /// Grid column of the accepted tile
    pub col: usize,
    /// Match score that met the threshold
    pub score: f64,
}

/// Scan a surface row-major and collect tiles whose score meets the threshold
///
/// Detection is per-tile independent: each tile is cropped, scored against
/// the reference shape, and accepted when `score >= threshold`. A zero
/// threshold accepts every tile, which the lattice pass uses to visualize
/// the full tiling.
pub fn scan(surface: &Surface, shape: &Surface, grid: TilingGrid, threshold: f64) -> Vec<TileHit> {
    let mut hits = Vec::new();
    for row in 0..grid.tiles_per_side() {
        for col in 0..grid.tiles_per_side() {
            let x = col * grid.tile_side();
            let y = row * grid.tile_side();
            if let Some(tile) = surface.crop(x, y, grid.tile_side()) {
                let score = match_score(&tile, shape);
                if score >= threshold {
                    hits.push(TileHit { row, col, score });
                }
            }
        }
    }
    hits
}

/// Draw a 1-pixel black outline over each accepted tile on the canvas
///
/// The outline covers exactly the tile's own bounding box; tiles are
/// disjoint, so outlines never overlap neighboring tiles.
pub fn mark(canvas: &mut Surface, grid: TilingGrid, hits: &[TileHit]) {
    for hit in hits {
        outline_tile(canvas, grid, hit.row, hit.col);
    }
}

fn outline_tile(canvas: &mut Surface, grid: TilingGrid, row: usize, col: usize) {
    let side = grid.tile_side();
    let left = col * side;
    let top = row * side;
    let right = left + side - 1;
    let bottom = top + side - 1;
    for x in left..=right {
        canvas.set(x, top, BLACK);
        canvas.set(x, bottom, BLACK);
    }
    for y in top..=bottom {
        canvas.set(left, y, BLACK);
        canvas.set(right, y, BLACK);
    }
}
