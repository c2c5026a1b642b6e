//! Square single-channel pixel surfaces
//!
//! Every surface in the pipeline is square by construction: the type is
//! built from a side length, so the width == height invariant cannot be
//! violated after input validation. Pixel buffers are never shared; crops
//! and copies always allocate independent storage.

use ndarray::Array2;

/// Background/stroke intensity for glyph strokes and detection outlines
pub const BLACK: u8 = 0;
/// Background intensity for empty regions
pub const WHITE: u8 = 255;
/// Reserved mid-tone used only for lattice marking
pub const LATTICE: u8 = 155;

/// Midpoint of the intensity range separating the dark and light classes
pub const CLASS_MIDPOINT: f64 = 127.5;

/// Check whether an intensity belongs to the dark class
pub fn is_dark(value: u8) -> bool {
    f64::from(value) < CLASS_MIDPOINT
}

/// Invert an intensity within the binary range
///
/// Maps `BLACK` to `WHITE` and back; the lattice mid-tone maps to its
/// complement.
pub const fn invert(value: u8) -> u8 {
    WHITE - value
}

/// Square grid of 8-bit intensity values
///
/// Stored row-major as an `Array2` indexed `[y, x]`. The public accessors
/// take `(x, y)` coordinates to match image conventions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    side: usize,
    data: Array2<u8>,
}

impl Surface {
    /// Create a surface with every pixel set to the given intensity
    pub fn filled(side: usize, value: u8) -> Self {
        Self {
            side,
            data: Array2::from_elem((side, side), value),
        }
    }

    /// Build a surface from a row-major pixel buffer
    ///
    /// Returns `None` when the buffer length is not `side * side`.
    pub fn from_pixels(side: usize, pixels: Vec<u8>) -> Option<Self> {
        Array2::from_shape_vec((side, side), pixels)
            .ok()
            .map(|data| Self { side, data })
    }

    /// Side length in pixels (width and height are always equal)
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Read the intensity at `(x, y)`, or `None` outside the surface
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.data.get([y, x]).copied()
    }

    /// Write the intensity at `(x, y)`; writes outside the surface are ignored
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if let Some(pixel) = self.data.get_mut([y, x]) {
            *pixel = value;
        }
    }

    /// Iterate all pixels as `((x, y), value)` in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = ((usize, usize), u8)> + '_ {
        self.data
            .indexed_iter()
            .map(|((y, x), &value)| ((x, y), value))
    }

    /// Extract a square region as a new independent surface
    ///
    /// Returns `None` when the region extends past the surface bounds.
    pub fn crop(&self, x: usize, y: usize, side: usize) -> Option<Self> {
        if x + side > self.side || y + side > self.side {
            return None;
        }
        let mut region = Self::filled(side, BLACK);
        for dy in 0..side {
            for dx in 0..side {
                if let Some(value) = self.get(x + dx, y + dy) {
                    region.set(dx, dy, value);
                }
            }
        }
        Some(region)
    }

    /// Copy another surface into this one with its origin at `(x, y)`
    ///
    /// Source pixels falling outside this surface are dropped.
    pub fn blit(&mut self, src: &Self, x: usize, y: usize) {
        for ((sx, sy), value) in src.pixels() {
            self.set(x + sx, y + sy, value);
        }
    }

    /// Count pixels with exactly the given intensity
    pub fn count_value(&self, value: u8) -> usize {
        self.data.iter().filter(|&&pixel| pixel == value).count()
    }
}
