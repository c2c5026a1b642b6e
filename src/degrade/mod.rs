//! Degradation and recovery engine
//!
//! This module contains the pixel-level corruption functionality including:
//! - Random pixel noise injection at configured intensity levels
//! - 3x3 threshold filtering for noise removal
//! - Periodic lattice generation, parameter inference, and removal

/// 3x3 threshold filter for noise removal
pub mod denoise;
/// Periodic occlusion lattice generation, inference, and removal
pub mod lattice;
/// Random pixel noise injection
pub mod noise;

pub use lattice::LatticeSpec;
