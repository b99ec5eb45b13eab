//! Boundary adapter resolving shapes from loose attribute objects.
//!
//! The engine only ever operates on the kind-tagged [`Shape`] enum; this
//! module turns untyped descriptors (JSON objects with or without an explicit
//! `"type"` tag) into that enum, inferring the kind from the attribute-name
//! signature when no tag is present.

use serde_json::{Map, Value};

use crate::error::ScoreError;
use crate::math::Vec2;
use crate::shape::{Shape, ShapeKind};

/// Resolve a shape kind from the set of attribute names present.
///
/// A descriptor matches a kind only when its sorted, comma-joined attribute
/// list equals the kind's signature. Returns `None` for unknown or ambiguous
/// attribute sets.
pub fn classify<'a, I>(attrs: I) -> Option<ShapeKind>
where
    I: IntoIterator<Item = &'a str>,
{
    let signature = join_signature(attrs);
    ShapeKind::ALL
        .into_iter()
        .find(|kind| kind.required_attrs().join(",") == signature)
}

/// Build a [`Shape`] from a JSON descriptor.
///
/// Accepts either a tagged object such as
/// `{"type": "circle", "x": 50, "y": 50, "r": 10}` or the bare attribute form
/// with the kind inferred per [`classify`].
pub fn shape_from_value(value: &Value) -> Result<Shape, ScoreError> {
    let Some(object) = value.as_object() else {
        return Err(ScoreError::UnresolvedSignature(value.to_string()));
    };

    let kind = match object.get("type") {
        Some(tag) => {
            let name = tag.as_str().unwrap_or_default();
            ShapeKind::ALL
                .into_iter()
                .find(|kind| kind.name() == name)
                .ok_or_else(|| ScoreError::UnknownKind(name.to_string()))?
        }
        None => {
            classify(object.keys().map(String::as_str)).ok_or_else(|| {
                ScoreError::UnresolvedSignature(join_signature(
                    object.keys().map(String::as_str),
                ))
            })?
        }
    };

    build_shape(kind, object)
}

fn join_signature<'a, I>(attrs: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keys: Vec<&str> = attrs.into_iter().collect();
    keys.sort_unstable();
    keys.dedup();
    keys.join(",")
}

fn build_shape(kind: ShapeKind, object: &Map<String, Value>) -> Result<Shape, ScoreError> {
    let attr = |name: &'static str| -> Result<f32, ScoreError> {
        object
            .get(name)
            .and_then(Value::as_f64)
            .map(|value| value as f32)
            .ok_or(ScoreError::MissingAttribute { kind, attr: name })
    };

    let shape = match kind {
        ShapeKind::Point => Shape::Point {
            center: Vec2::new(attr("x")?, attr("y")?),
        },
        ShapeKind::Line => Shape::Line {
            start: Vec2::new(attr("x1")?, attr("y1")?),
            end: Vec2::new(attr("x2")?, attr("y2")?),
        },
        ShapeKind::Circle => Shape::Circle {
            center: Vec2::new(attr("x")?, attr("y")?),
            radius: attr("r")?,
        },
        ShapeKind::Ellipse => Shape::Ellipse {
            center: Vec2::new(attr("x")?, attr("y")?),
            radius: Vec2::new(attr("r1")?, attr("r2")?),
        },
        ShapeKind::Rect => Shape::rect(attr("x")?, attr("y")?, attr("width")?, attr("height")?),
        ShapeKind::Polygon => {
            let points = object
                .get("points")
                .and_then(Value::as_array)
                .ok_or(ScoreError::MissingAttribute { kind, attr: "points" })?;
            let vertices = points
                .iter()
                .map(|point| {
                    let x = point.get("x").and_then(Value::as_f64);
                    let y = point.get("y").and_then(Value::as_f64);
                    match (x, y) {
                        (Some(x), Some(y)) => Ok(Vec2::new(x as f32, y as f32)),
                        _ => Err(ScoreError::MissingAttribute { kind, attr: "points" }),
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            Shape::Polygon { points: vertices }
        }
    };
    Ok(shape)
}
