//! Random mosaic assembly from pooled glyphs

use crate::raster::glyphs::GlyphPool;
use crate::raster::surface::{Surface, WHITE};
use rand::rngs::StdRng;

/// Assembles an N x N arrangement of randomly chosen glyphs
///
/// Glyphs may repeat; every cell is an independent uniform draw from the
/// whole pool, background glyphs included.
pub struct MosaicBuilder<'a> {
    pool: &'a GlyphPool,
    tiles_per_side: usize,
}

impl<'a> MosaicBuilder<'a> {
    /// Create a builder over the given pool
    pub const fn new(pool: &'a GlyphPool, tiles_per_side: usize) -> Self {
        Self {
            pool,
            tiles_per_side,
        }
    }

    /// Side length of the mosaic this builder produces
    pub const fn side(&self) -> usize {
        self.pool.side() * self.tiles_per_side
    }

    /// Assemble the mosaic using the given seeded generator
    pub fn build(&self, rng: &mut StdRng) -> Surface {
        let glyph_side = self.pool.side();
        let mut mosaic = Surface::filled(self.side(), WHITE);
        for gx in 0..self.tiles_per_side {
            for gy in 0..self.tiles_per_side {
                if let Some(glyph) = self.pool.random_glyph(rng) {
                    mosaic.blit(glyph, gx * glyph_side, gy * glyph_side);
                }
            }
        }
        mosaic
    }
}
