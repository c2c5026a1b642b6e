//! Tests for command-line parsing and output path resolution

#[cfg(test)]
mod tests {
    use clap::Parser;
    use glyphgrid::io::cli::Cli;
    use std::path::PathBuf;

    // Tests defaults applied when only the glyph directory is given
    // Verified by changing the default seed
    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["glyphgrid", "corpus/glyphs"]);
        assert!(cli.is_ok(), "a bare glyph directory must parse");
        if let Ok(cli) = cli {
            assert_eq!(cli.glyph_dir, PathBuf::from("corpus/glyphs"));
            assert_eq!(cli.tiles, 5);
            assert_eq!(cli.step, 8);
            assert_eq!(cli.width, 2);
            assert_eq!(cli.seed, 42);
            assert!(cli.output.is_none());
            assert!(cli.should_show_progress());
        }
    }

    // Tests explicit flags override the defaults
    // Verified by swapping the short flags for step and width
    #[test]
    fn test_explicit_arguments() {
        let cli = Cli::try_parse_from([
            "glyphgrid",
            "corpus/glyphs",
            "-n",
            "3",
            "-s",
            "4",
            "-W",
            "1",
            "--seed",
            "7",
            "--quiet",
        ]);
        assert!(cli.is_ok());
        if let Ok(cli) = cli {
            assert_eq!(cli.tiles, 3);
            assert_eq!(cli.step, 4);
            assert_eq!(cli.width, 1);
            assert_eq!(cli.seed, 7);
            assert!(!cli.should_show_progress());
        }
    }

    // Tests output root resolution with and without an override
    // Verified by defaulting to the glyph directory itself
    #[test]
    fn test_output_root_resolution() {
        let cli = Cli::try_parse_from(["glyphgrid", "corpus/glyphs"]);
        assert_eq!(
            cli.map(|c| c.output_root()).ok(),
            Some(PathBuf::from("corpus"))
        );

        let overridden =
            Cli::try_parse_from(["glyphgrid", "corpus/glyphs", "--output", "results"]);
        assert_eq!(
            overridden.map(|c| c.output_root()).ok(),
            Some(PathBuf::from("results"))
        );
    }

    // Tests the glyph directory is required
    // Verified by making the positional optional
    #[test]
    fn test_glyph_directory_required() {
        assert!(Cli::try_parse_from(["glyphgrid"]).is_err());
    }
}
