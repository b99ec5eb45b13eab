//! Central error type for shape scoring.

use crate::shape::ShapeKind;

/// Failure conditions surfaced by shape parsing and scoring.
#[derive(thiserror::Error, Debug)]
pub enum ScoreError {
    /// A tagged descriptor named a kind that is not registered.
    #[error("unknown shape type {0:?}")]
    UnknownKind(String),

    /// A bare descriptor whose attribute set matches no kind signature.
    #[error("attribute signature {0:?} matches no shape kind")]
    UnresolvedSignature(String),

    /// The kind was resolved but a required attribute is absent or not a number.
    #[error("{kind:?} descriptor is missing attribute {attr:?}")]
    MissingAttribute {
        /// Kind the descriptor resolved to.
        kind: ShapeKind,
        /// Name of the offending attribute.
        attr: &'static str,
    },

    /// Polygons need at least three vertices.
    #[error("polygon needs at least 3 vertices, got {0}")]
    MalformedPolygon(usize),

    /// Surface dimensions that cannot back a pixel buffer.
    #[error("cannot allocate a {width}x{height} surface")]
    InvalidSurface {
        /// Requested surface width.
        width: u32,
        /// Requested surface height.
        height: u32,
    },

    /// No shape covered any pixel, so intersection over union is 0/0.
    #[error("no shape produced any coverage, overlap ratio is undefined")]
    UndefinedRatio,
}
