//! Random pixel noise injection at configured intensity levels
//!
//! Corruption flips the same fraction of dark and of light pixels
//! independently rather than a fraction of the whole image, preserving
//! approximate class balance under corruption.

use crate::raster::Surface;
use crate::raster::surface::{invert, is_dark};
use rand::{Rng, rngs::StdRng};

/// Produce one corrupted copy of the source per intensity level
///
/// Copies never share storage with the source or with each other; the
/// source surface is left unmodified.
pub fn corrupt_at_levels(source: &Surface, levels: &[f64], rng: &mut StdRng) -> Vec<Surface> {
    levels
        .iter()
        .map(|&level| corrupt(source, level, rng))
        .collect()
}

/// Corrupt a copy of the source at a single intensity level
///
/// Partitions all coordinates into dark and light classes at the intensity
/// midpoint, then flips `round(level * class_len)` uniformly chosen pixels
/// in each class. Sampling is without replacement within a class, so no
/// pixel is flipped twice.
pub fn corrupt(source: &Surface, level: f64, rng: &mut StdRng) -> Surface {
    let mut corrupted = source.clone();
    let (dark, light) = partition_classes(source);
    flip_class(&mut corrupted, dark, level, rng);
    flip_class(&mut corrupted, light, level, rng);
    corrupted
}

/// Split all pixel coordinates into dark-class and light-class lists
fn partition_classes(source: &Surface) -> (Vec<(usize, usize)>, Vec<(usize, usize)>) {
    let mut dark = Vec::new();
    let mut light = Vec::new();
    for ((x, y), value) in source.pixels() {
        if is_dark(value) {
            dark.push((x, y));
        } else {
            light.push((x, y));
        }
    }
    (dark, light)
}

/// Flip a level-sized fraction of the candidate class without replacement
fn flip_class(
    surface: &mut Surface,
    mut candidates: Vec<(usize, usize)>,
    level: f64,
    rng: &mut StdRng,
) {
    let count = (level * candidates.len() as f64).round() as usize;
    let count = count.min(candidates.len());
    for _ in 0..count {
        let index = rng.random_range(0..candidates.len());
        let (x, y) = candidates.swap_remove(index);
        if let Some(value) = surface.get(x, y) {
            surface.set(x, y, invert(value));
        }
    }
}
