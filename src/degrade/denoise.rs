//! 3x3 threshold filter for noise removal

use crate::raster::Surface;
use crate::raster::surface::{BLACK, CLASS_MIDPOINT, WHITE};

/// Restore a corrupted surface with a fixed 3x3 mean-threshold filter
///
/// Every interior pixel becomes `BLACK` when the arithmetic mean of its
/// 3x3 neighborhood falls below the intensity midpoint, `WHITE` otherwise.
/// All nine samples are read from the unmodified input, never from
/// already-filtered neighbors. The 1-pixel border keeps its corrupted
/// values.
pub fn restore(corrupted: &Surface) -> Surface {
    let mut restored = corrupted.clone();
    let side = corrupted.side();
    if side < 3 {
        return restored;
    }

    for y in 1..side - 1 {
        for x in 1..side - 1 {
            let mut sum = 0.0;
            for ny in y - 1..=y + 1 {
                for nx in x - 1..=x + 1 {
                    sum += f64::from(corrupted.get(nx, ny).unwrap_or(WHITE));
                }
            }
            let mean = sum / 9.0;
            let value = if mean < CLASS_MIDPOINT { BLACK } else { WHITE };
            restored.set(x, y, value);
        }
    }
    restored
}
