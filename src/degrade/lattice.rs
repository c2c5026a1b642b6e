//! Periodic occlusion lattice: generation, parameter inference, removal
//!
//! A lattice is defined by two run lengths: `step` background indices
//! followed by `width` grid-line indices, repeating from index 0. The same
//! index set selects both the marked columns and the marked rows.

use crate::raster::Surface;
use crate::raster::surface::{BLACK, LATTICE, WHITE};

/// Run-length parameters of a periodic lattice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatticeSpec {
    /// Background run length between grid lines
    pub step: usize,
    /// Grid-line run length
    pub width: usize,
}

impl LatticeSpec {
    /// Create a spec from step and width run lengths
    pub const fn new(step: usize, width: usize) -> Self {
        Self { step, width }
    }

    /// Indices belonging to a grid line within `0..extent`
    ///
    /// The cycle starts in the background phase, so the first `step`
    /// indices are clear; with `step == 0` the line phase starts
    /// immediately. Empty when `step + width == 0`.
    pub fn line_indices(&self, extent: usize) -> Vec<usize> {
        let period = self.step + self.width;
        if period == 0 {
            return Vec::new();
        }
        (0..extent)
            .filter(|index| index % period >= self.step)
            .collect()
    }
}

/// Overlay a periodic lattice on a copy of the surface
///
/// Every pixel of each selected column, then of each selected row, is
/// painted with the reserved lattice mid-tone. The row pass runs last and
/// wins at crossings.
pub fn overlay(surface: &Surface, spec: LatticeSpec) -> Surface {
    let mut overlaid = surface.clone();
    paint_lines(&mut overlaid, spec, LATTICE);
    overlaid
}

/// Infer lattice run lengths from a surface bearing an unknown lattice
///
/// Scans column 0 top to bottom, counting consecutive `WHITE` pixels and
/// consecutive non-`WHITE` pixels. The first `WHITE` pixel seen after at
/// least one non-`WHITE` pixel closes the measurement: the dark run is the
/// line width, the light run before it the step. Returns `None` when the
/// scan ends without that transition, meaning no lattice was detected;
/// callers must not proceed to removal.
pub fn infer(surface: &Surface) -> Option<LatticeSpec> {
    let mut light_run = 0;
    let mut dark_run = 0;
    for y in 0..surface.side() {
        let value = surface.get(0, y)?;
        if value == WHITE {
            if dark_run != 0 {
                return Some(LatticeSpec::new(light_run, dark_run));
            }
            light_run += 1;
        } else {
            dark_run += 1;
        }
    }
    None
}

/// Remove a lattice by blanking the periodic stripes on a copy
///
/// Every selected column and row pixel is set to `BLACK`. This is
/// approximate reconstruction: the occluded background values are not
/// recoverable.
pub fn remove(surface: &Surface, spec: LatticeSpec) -> Surface {
    let mut cleared = surface.clone();
    paint_lines(&mut cleared, spec, BLACK);
    cleared
}

/// Paint every pixel of the spec's columns, then rows, with one intensity
fn paint_lines(surface: &mut Surface, spec: LatticeSpec, value: u8) {
    let side = surface.side();
    let indices = spec.line_indices(side);
    for &x in &indices {
        for y in 0..side {
            surface.set(x, y, value);
        }
    }
    for &y in &indices {
        for x in 0..side {
            surface.set(x, y, value);
        }
    }
}
