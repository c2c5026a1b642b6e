//! Tests for black-recall template scoring

#[cfg(test)]
mod tests {
    use glyphgrid::detect::match_score;
    use glyphgrid::raster::Surface;
    use glyphgrid::raster::surface::{BLACK, WHITE};

    fn shape_with_blacks(side: usize, blacks: &[(usize, usize)]) -> Surface {
        let mut shape = Surface::filled(side, WHITE);
        for &(x, y) in blacks {
            shape.set(x, y, BLACK);
        }
        shape
    }

    // Tests the superset property: full coverage scores 1.0
    // Verified by penalizing extra tile black pixels
    #[test]
    fn test_superset_scores_one() {
        let shape = shape_with_blacks(4, &[(0, 0), (1, 1), (2, 2)]);
        let tile = Surface::filled(4, BLACK);
        assert!((match_score(&tile, &shape) - 1.0).abs() < f64::EPSILON);
    }

    // Tests partial coverage against the exact fraction
    // Verified by dividing by the tile's black count
    #[test]
    fn test_partial_coverage_fraction() {
        let shape = shape_with_blacks(4, &[(0, 0), (1, 0), (2, 0), (3, 0)]);
        let tile = shape_with_blacks(4, &[(0, 0), (1, 0), (2, 0)]);
        assert!((match_score(&tile, &shape) - 0.75).abs() < f64::EPSILON);
    }

    // Tests the asymmetry of the score
    // Verified by symmetrizing the comparison
    #[test]
    fn test_score_is_asymmetric() {
        let shape = shape_with_blacks(4, &[(0, 0)]);
        let tile = Surface::filled(4, BLACK);

        let forward = match_score(&tile, &shape);
        let reverse = match_score(&shape, &tile);
        assert!((forward - 1.0).abs() < f64::EPSILON);
        assert!(
            (reverse - 1.0 / 16.0).abs() < f64::EPSILON,
            "reversing the roles must change the score"
        );
    }

    // Tests the zero end of the range
    // Verified by counting white coincidences as matches
    #[test]
    fn test_no_coverage_scores_zero() {
        let shape = shape_with_blacks(4, &[(1, 1), (2, 2)]);
        let tile = Surface::filled(4, WHITE);
        assert!(match_score(&tile, &shape).abs() < f64::EPSILON);
    }

    // Tests the vacuous match for a shape without black pixels
    // Verified by dividing by the zero black count
    #[test]
    fn test_empty_shape_is_vacuous_match() {
        let shape = Surface::filled(4, WHITE);
        let tile = Surface::filled(4, WHITE);
        assert!((match_score(&tile, &shape) - 1.0).abs() < f64::EPSILON);
    }
}
