//! Tests for error display and source wiring

#[cfg(test)]
mod tests {
    use glyphgrid::io::error::{PipelineError, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests the fatal-input display messages
    // Verified by swapping width and height in the format
    #[test]
    fn test_display_messages() {
        let non_square = PipelineError::NonSquareGlyph {
            path: PathBuf::from("glyphs/a.png"),
            width: 3,
            height: 2,
        };
        assert_eq!(
            non_square.to_string(),
            "Glyph 'glyphs/a.png' is 3x2; glyphs must be square"
        );

        let mismatch = PipelineError::TileMismatch {
            surface: 10,
            tiles: 3,
        };
        assert_eq!(
            mismatch.to_string(),
            "Tile count 3 does not evenly divide surface side 10"
        );
    }

    // Tests the invalid parameter helper
    // Verified by dropping the reason from the message
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("tiles", &0, &"at least one tile is required");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'tiles' = '0': at least one tile is required"
        );
    }

    // Tests that wrapped I/O errors stay reachable through source()
    // Verified by returning None for FileSystem errors
    #[test]
    fn test_source_wiring() {
        let error = PipelineError::FileSystem {
            path: PathBuf::from("out"),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        };
        assert!(error.source().is_some());

        let plain = PipelineError::SourceDirMissing {
            path: PathBuf::from("glyphs"),
        };
        assert!(plain.source().is_none());
    }

    // Tests the blanket conversions used by the ? operator
    // Verified by mapping io errors to ImageLoad
    #[test]
    fn test_from_io_error() {
        let converted: PipelineError = std::io::Error::other("boom").into();
        assert!(matches!(converted, PipelineError::FileSystem { .. }));
    }
}
