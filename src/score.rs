//! Scoring pipeline: draw, accumulate, count, ratio.

use tiny_skia::Pixmap;

use crate::canvas::Canvas;
use crate::coverage::{CoverageMap, SHAPE_WEIGHT};
use crate::error::ScoreError;
use crate::shape::Shape;

/// Scoring configuration used when the caller does not supply a surface.
#[derive(Debug, Copy, Clone)]
pub struct ScoreOptions {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Stroke/point thickness giving zero-area primitives a footprint.
    pub allowance: f32,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            allowance: 20.0,
        }
    }
}

/// Score how closely a set of shapes overlaps, on a fresh surface.
///
/// Draws every shape in input order, then returns intersection pixels over
/// union pixels as a ratio in [0, 1]. Shapes covering the same footprint
/// score near 1, disjoint shapes score 0. Zero union coverage is reported as
/// [`ScoreError::UndefinedRatio`], never coerced to a number.
pub fn score(shapes: &[Shape], options: ScoreOptions) -> Result<f32, ScoreError> {
    let mut surface =
        Pixmap::new(options.width, options.height).ok_or(ScoreError::InvalidSurface {
            width: options.width,
            height: options.height,
        })?;
    score_on(shapes, &mut surface, options.allowance)
}

/// Score shapes on a caller-supplied surface.
///
/// The surface is cleared before use and holds the combined coverage map in
/// its alpha channel afterwards. It must not be shared with another in-flight
/// scoring call.
pub fn score_on(
    shapes: &[Shape],
    surface: &mut Pixmap,
    allowance: f32,
) -> Result<f32, ScoreError> {
    for shape in shapes {
        shape.validate()?;
    }
    log::debug!(
        "scoring {} shapes on a {}x{} surface",
        shapes.len(),
        surface.width(),
        surface.height()
    );

    let mut coverage = CoverageMap::new(surface.width(), surface.height());
    {
        let mut canvas = Canvas::new(surface, allowance);
        for shape in shapes {
            canvas.clear();
            canvas.draw(shape);
            coverage.accumulate(canvas.alphas());
            log::trace!("accumulated {:?}", shape.kind());
        }
    }
    coverage.write_to(surface);

    let intersection = coverage.count_above(SHAPE_WEIGHT);
    let union = coverage.count_above(0);
    log::debug!("{intersection} intersection / {union} union pixels");
    if union == 0 {
        return Err(ScoreError::UndefinedRatio);
    }
    Ok(intersection as f32 / union as f32)
}
