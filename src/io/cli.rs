//! Command-line interface and batch pipeline runner
//!
//! The runner wires the corpus stages in sequence: glyph pool loading,
//! mosaic assembly, noise injection, filtering, detection over both the
//! restored and the raw corrupted copies, then the lattice overlay,
//! inference, removal, and the final detection pass. Every stage persists
//! its product before the next one starts.

use crate::degrade::lattice::{self, LatticeSpec};
use crate::degrade::{denoise, noise};
use crate::detect::{TilingGrid, mark, scan};
use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_STEP, DEFAULT_TILES, DEFAULT_WIDTH, DELATTICE_DIR, DENOISED_DIR,
    DETECTED_DIR, DETECTED_LATTICE_DIR, DETECTED_NOISY_DIR, LATTICE_DIR, LATTICE_PASS_THRESHOLD,
    MOSAIC_FILENAME, NOISE_LEVELS, NOISY_DIR, SHAPE_FILENAME,
};
use crate::io::error::{PipelineError, Result, computation_error, invalid_parameter};
use crate::io::image::save_surface;
use crate::io::progress::ProgressManager;
use crate::raster::{GlyphPool, MosaicBuilder, Surface};
use clap::Parser;
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

/// Number of reported pipeline stages
const STAGE_COUNT: usize = 9;

#[derive(Parser)]
#[command(name = "glyphgrid")]
#[command(
    author,
    version,
    about = "Generate a glyph mosaic corpus and measure detection under noise and lattice occlusion"
)]
/// Command-line arguments for the detection experiment
pub struct Cli {
    /// Directory containing the square glyph images
    #[arg(value_name = "GLYPH_DIR")]
    pub glyph_dir: PathBuf,

    /// Glyphs per mosaic side
    #[arg(short = 'n', long, default_value_t = DEFAULT_TILES)]
    pub tiles: usize,

    /// Background run length between lattice lines
    #[arg(short, long, default_value_t = DEFAULT_STEP)]
    pub step: usize,

    /// Lattice line run length
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Random seed for reproducible glyph choice and noise
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output directory (defaults to the glyph directory's parent)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve the output root directory
    pub fn output_root(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            self.glyph_dir
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        })
    }
}

/// Destination folders for the pipeline products
struct OutputLayout {
    root: PathBuf,
    noisy: PathBuf,
    denoised: PathBuf,
    detected: PathBuf,
    detected_noisy: PathBuf,
    lattice: PathBuf,
    delattice: PathBuf,
    detected_lattice: PathBuf,
}

impl OutputLayout {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            noisy: root.join(NOISY_DIR),
            denoised: root.join(DENOISED_DIR),
            detected: root.join(DETECTED_DIR),
            detected_noisy: root.join(DETECTED_NOISY_DIR),
            lattice: root.join(LATTICE_DIR),
            delattice: root.join(DELATTICE_DIR),
            detected_lattice: root.join(DETECTED_LATTICE_DIR),
        }
    }

    /// Delete stale product folders and recreate them empty
    fn reset(&self) -> Result<()> {
        let folders = [
            &self.noisy,
            &self.denoised,
            &self.detected,
            &self.detected_noisy,
            &self.lattice,
            &self.delattice,
            &self.detected_lattice,
        ];
        for folder in folders {
            if folder.exists() {
                std::fs::remove_dir_all(folder).map_err(|e| PipelineError::FileSystem {
                    path: folder.clone(),
                    operation: "remove directory",
                    source: e,
                })?;
            }
            std::fs::create_dir_all(folder).map_err(|e| PipelineError::FileSystem {
                path: folder.clone(),
                operation: "create directory",
                source: e,
            })?;
        }
        Ok(())
    }
}

/// Executes the full degradation and detection pipeline
pub struct PipelineRunner {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl PipelineRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli
            .should_show_progress()
            .then(|| ProgressManager::new(STAGE_COUNT));
        Self { cli, progress }
    }

    /// Run every pipeline stage in order
    ///
    /// # Errors
    ///
    /// Returns an error on invalid parameters, a defective glyph pool, or
    /// any filesystem/codec failure. All errors are fatal; no partial
    /// recovery is attempted.
    pub fn run(&self) -> Result<()> {
        if self.cli.tiles == 0 {
            return Err(invalid_parameter(
                "tiles",
                &self.cli.tiles,
                &"at least one glyph per mosaic side is required",
            ));
        }

        let layout = OutputLayout::new(&self.cli.output_root());
        layout.reset()?;

        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        self.start_stage("loading glyph pool");
        let pool = GlyphPool::load(&self.cli.glyph_dir)?;
        self.complete_stage();

        self.start_stage("assembling mosaic");
        let builder = MosaicBuilder::new(&pool, self.cli.tiles);
        let mosaic = builder.build(&mut rng);
        let shape = pool
            .random_shape(&mut rng)
            .cloned()
            .ok_or_else(|| computation_error("run", &"shape pool unexpectedly empty"))?;
        save_surface(&mosaic, &layout.root.join(MOSAIC_FILENAME))?;
        save_surface(&shape, &layout.root.join(SHAPE_FILENAME))?;
        info!("mosaic assembled: side {} pixels", mosaic.side());
        self.complete_stage();

        let grid = TilingGrid::new(mosaic.side(), self.cli.tiles)?;
        let tile_total = grid.tiles_per_side() * grid.tiles_per_side();

        self.start_stage("injecting noise");
        let noisy = noise::corrupt_at_levels(&mosaic, &NOISE_LEVELS, &mut rng);
        for (level, corrupted) in NOISE_LEVELS.iter().zip(&noisy) {
            save_surface(corrupted, &layout.noisy.join(format!("noisy_{level}.png")))?;
        }
        self.complete_stage();

        self.start_stage("denoising");
        let denoised: Vec<Surface> = noisy.iter().map(denoise::restore).collect();
        for (level, restored) in NOISE_LEVELS.iter().zip(&denoised) {
            save_surface(
                restored,
                &layout.denoised.join(format!("denoised_{level}.png")),
            )?;
        }
        self.complete_stage();

        self.start_stage("detecting on denoised copies");
        for ((level, restored), corrupted) in NOISE_LEVELS.iter().zip(&denoised).zip(&noisy) {
            let hits = scan(restored, &shape, grid, 1.0 - level);
            info!(
                "level {level}: {}/{tile_total} tiles accepted after denoising",
                hits.len()
            );
            let mut canvas = corrupted.clone();
            mark(&mut canvas, grid, &hits);
            save_surface(
                &canvas,
                &layout.detected.join(format!("detected_{level}.png")),
            )?;
        }
        self.complete_stage();

        self.start_stage("detecting on noisy copies");
        for (level, corrupted) in NOISE_LEVELS.iter().zip(&noisy) {
            let hits = scan(corrupted, &shape, grid, 1.0 - level);
            info!(
                "level {level}: {}/{tile_total} tiles accepted without denoising",
                hits.len()
            );
            let mut canvas = corrupted.clone();
            mark(&mut canvas, grid, &hits);
            save_surface(
                &canvas,
                &layout
                    .detected_noisy
                    .join(format!("detected_noisy_{level}.png")),
            )?;
        }
        self.complete_stage();

        self.start_stage("overlaying lattice");
        let spec = LatticeSpec::new(self.cli.step, self.cli.width);
        let latticed = lattice::overlay(&mosaic, spec);
        save_surface(&latticed, &layout.lattice.join("lattice.png"))?;
        self.complete_stage();

        self.start_stage("removing lattice");
        let delatticed = match lattice::infer(&latticed) {
            Some(found) => {
                info!(
                    "lattice inferred: step {}, width {}",
                    found.step, found.width
                );
                lattice::remove(&latticed, found)
            }
            None => {
                error!("lattice parameters not detected; leaving the image unchanged");
                latticed.clone()
            }
        };
        save_surface(&delatticed, &layout.delattice.join("delattice.png"))?;
        self.complete_stage();

        self.start_stage("detecting on de-latticed image");
        let hits = scan(&delatticed, &shape, grid, LATTICE_PASS_THRESHOLD);
        info!("lattice pass: {}/{tile_total} tiles marked", hits.len());
        let mut canvas = latticed.clone();
        mark(&mut canvas, grid, &hits);
        save_surface(
            &canvas,
            &layout.detected_lattice.join("detected_lattice.png"),
        )?;
        self.complete_stage();

        if let Some(pm) = &self.progress {
            pm.finish();
        }
        Ok(())
    }

    fn start_stage(&self, name: &str) {
        info!("{name}");
        if let Some(pm) = &self.progress {
            pm.start_stage(name);
        }
    }

    fn complete_stage(&self) {
        if let Some(pm) = &self.progress {
            pm.complete_stage();
        }
    }
}
