//! Coverage accumulation and pixel counting.

use tiny_skia::Pixmap;

/// Alpha contributed by one shape after its layer is collapsed.
///
/// A lone shape's pixels sit at exactly this value, below the intersection
/// cut; the byte saturates after 17 overlapping layers.
pub(crate) const SHAPE_WEIGHT: u8 = 15;

/// Accumulated per-pixel coverage across all drawn shapes.
///
/// Each pixel holds [`SHAPE_WEIGHT`] times the number of shapes that touched
/// it, saturating at 255. Anti-aliased edge gradients are collapsed to the
/// single "touched" weight before accumulation, so thresholding cleanly
/// separates "covered by one shape" from "covered by several".
pub(crate) struct CoverageMap {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl CoverageMap {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width as usize * height as usize],
        }
    }

    /// Fold one freshly drawn layer into the accumulated coverage.
    ///
    /// Every pixel the layer touched at all contributes exactly
    /// [`SHAPE_WEIGHT`], regardless of how soft its anti-aliased alpha was.
    pub(crate) fn accumulate<I>(&mut self, layer: I)
    where
        I: Iterator<Item = u8>,
    {
        for (acc, alpha) in self.alpha.iter_mut().zip(layer) {
            if alpha > 0 {
                *acc = acc.saturating_add(SHAPE_WEIGHT);
            }
        }
    }

    /// Count pixels with accumulated alpha strictly above `min_alpha`.
    pub(crate) fn count_above(&self, min_alpha: u8) -> usize {
        self.alpha.iter().filter(|&&alpha| alpha > min_alpha).count()
    }

    /// Write the combined coverage into the surface's alpha channel.
    ///
    /// Leaves the surface holding exactly the map that was counted, so
    /// callers supplying their own surface can inspect it afterwards.
    pub(crate) fn write_to(&self, surface: &mut Pixmap) {
        debug_assert_eq!(surface.width(), self.width);
        debug_assert_eq!(surface.height(), self.height);
        for (pixel, &alpha) in surface.data_mut().chunks_exact_mut(4).zip(&self.alpha) {
            pixel.copy_from_slice(&[0, 0, 0, alpha]);
        }
    }
}
