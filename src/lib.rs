//! Raster-based overlap scoring for 2D shapes.
//!
//! Shapes are drawn one at a time onto a shared pixel surface, each layer's
//! anti-aliased coverage is collapsed into a fixed per-shape weight, and the
//! overlap score is the ratio of intersection pixels to union pixels.

mod canvas;
mod classify;
mod coverage;
mod error;
mod math;
mod score;
mod shape;


pub use classify::{classify, shape_from_value};
pub use error::ScoreError;
pub use math::Vec2;
pub use score::{ScoreOptions, score, score_on};
pub use shape::{Shape, ShapeKind};
