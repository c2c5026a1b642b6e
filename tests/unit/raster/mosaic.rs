//! Tests for random mosaic assembly

#[cfg(test)]
mod tests {
    use glyphgrid::raster::surface::{BLACK, WHITE};
    use glyphgrid::raster::{GlyphPool, MosaicBuilder, Surface};
    use rand::{SeedableRng, rngs::StdRng};

    // Tests mosaic dimensions for an N x N arrangement
    // Verified by multiplying by the wrong factor
    #[test]
    fn test_build_dimensions() {
        let pool = GlyphPool::from_surfaces(vec![Surface::filled(4, BLACK)], &[]);
        let builder = MosaicBuilder::new(&pool, 2);
        assert_eq!(builder.side(), 8);

        let mut rng = StdRng::seed_from_u64(42);
        let mosaic = builder.build(&mut rng);
        assert_eq!(mosaic.side(), 8);
    }

    // Tests that a single-glyph pool tiles the whole mosaic with that glyph
    // Verified by leaving gaps between glyph cells
    #[test]
    fn test_build_tiles_exhaustively() {
        let mut glyph = Surface::filled(3, WHITE);
        glyph.set(1, 1, BLACK);
        let pool = GlyphPool::from_surfaces(vec![glyph], &[]);
        let builder = MosaicBuilder::new(&pool, 3);

        let mut rng = StdRng::seed_from_u64(1);
        let mosaic = builder.build(&mut rng);

        assert_eq!(mosaic.side(), 9);
        assert_eq!(mosaic.count_value(BLACK), 9, "one stroke pixel per cell");
        for cell in 0..3 {
            assert_eq!(mosaic.get(cell * 3 + 1, 1), Some(BLACK));
            assert_eq!(mosaic.get(1, cell * 3 + 1), Some(BLACK));
        }
    }

    // Tests seed determinism of glyph choice
    // Verified by reseeding from entropy per build
    #[test]
    fn test_build_is_seed_deterministic() {
        let glyphs = vec![
            Surface::filled(2, BLACK),
            Surface::filled(2, WHITE),
            Surface::filled(2, 155),
        ];
        let pool = GlyphPool::from_surfaces(glyphs, &[]);
        let builder = MosaicBuilder::new(&pool, 4);

        let mut first_rng = StdRng::seed_from_u64(99);
        let mut second_rng = StdRng::seed_from_u64(99);
        assert_eq!(builder.build(&mut first_rng), builder.build(&mut second_rng));

        let mut other_rng = StdRng::seed_from_u64(100);
        assert_ne!(
            builder.build(&mut first_rng),
            builder.build(&mut other_rng),
            "different seeds should virtually always disagree for a 4x4 grid of 3 glyphs"
        );
    }
}
