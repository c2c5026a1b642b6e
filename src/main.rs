//! CLI entry point for the glyph mosaic detection experiment

use clap::Parser;
use glyphgrid::io::cli::{Cli, PipelineRunner};

fn main() -> glyphgrid::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let runner = PipelineRunner::new(cli);
    runner.run()
}
