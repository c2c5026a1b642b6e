//! Pipeline constants and runtime configuration defaults

// Corruption intensity classes shared by noise injection and detection
/// Ordered corruption probabilities; each also derives the detection
/// threshold `1 - level` for its degraded copy
pub const NOISE_LEVELS: [f64; 4] = [0.1, 0.2, 0.3, 0.4];

/// Acceptance threshold override for the lattice detection pass
pub const LATTICE_PASS_THRESHOLD: f64 = 0.0;

// Glyph pool partitioning
/// File stem marker for the background glyph excluded from the shape pool
pub const EMPTY_GLYPH_STEM: &str = "space";

// Output artifact names
/// File name of the generated mosaic
pub const MOSAIC_FILENAME: &str = "image.png";
/// File name of the saved reference shape
pub const SHAPE_FILENAME: &str = "shape.png";

// Output folder names, one per pipeline product
/// Corrupted copies, one per noise level
pub const NOISY_DIR: &str = "noisy";
/// Filter-restored copies
pub const DENOISED_DIR: &str = "denoised";
/// Detection over the restored copies
pub const DETECTED_DIR: &str = "detected";
/// Detection over the raw corrupted copies
pub const DETECTED_NOISY_DIR: &str = "detected_noisy";
/// Mosaic with the lattice overlay
pub const LATTICE_DIR: &str = "lattice";
/// Mosaic after lattice removal
pub const DELATTICE_DIR: &str = "delattice";
/// Detection over the de-latticed mosaic
pub const DETECTED_LATTICE_DIR: &str = "detected_lattice";

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default glyphs per mosaic side
pub const DEFAULT_TILES: usize = 5;
/// Default background run length between lattice lines
pub const DEFAULT_STEP: usize = 8;
/// Default lattice line run length
pub const DEFAULT_WIDTH: usize = 2;
