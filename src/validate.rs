//! Argument validation helpers
//!
//! Most shape checks are enforced by the type system. These helpers cover the
//! places where values still arrive dynamically: slices of positional values
//! and JSON option objects handed in from the host page.

use glam::Vec2;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ClibError, Result};

/// Fail with `ArgumentCount` unless `min <= got <= max`
pub fn check_arity(got: usize, min: usize, max: usize) -> Result<()> {
    if got < min || got > max {
        return Err(ClibError::ArgumentCount { min, max, got });
    }
    Ok(())
}

/// Merge a partial JSON object over `defaults`.
///
/// Every field of `defaults` is kept unless `value` carries the same key with a
/// value of the same JSON kind, in which case the supplied value wins. Keys the
/// defaults don't know about are ignored.
pub fn validate_object<T>(value: &Value, defaults: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(supplied) = value else {
        return Err(ClibError::ArgumentType {
            index: 1,
            expected: "object",
        });
    };

    let Ok(Value::Object(base)) = serde_json::to_value(defaults) else {
        return Err(ClibError::ArgumentType {
            index: 2,
            expected: "object",
        });
    };

    let mut merged = Map::with_capacity(base.len());
    for (key, default) in base {
        let field = match supplied.get(&key) {
            Some(v) if same_kind(v, &default) => v.clone(),
            _ => default,
        };
        merged.insert(key, field);
    }

    serde_json::from_value(Value::Object(merged)).map_err(|e| {
        log::warn!("option object rejected: {}", e);
        ClibError::ArgumentType {
            index: 1,
            expected: "options object",
        }
    })
}

/// Read a `{x, y}` JSON object as a vector, naming any missing component
pub fn validate_vector(value: &Value) -> Result<Vec2> {
    let x = value.get("x");
    let y = value.get("y");

    let (x, y) = match (x, y) {
        (Some(x), Some(y)) => (x, y),
        (None, None) => {
            return Err(ClibError::InvalidGeometry(
                "vector must have an X and Y component".into(),
            ));
        }
        (None, Some(_)) => {
            return Err(ClibError::InvalidGeometry(
                "vector must have an X component".into(),
            ));
        }
        (Some(_), None) => {
            return Err(ClibError::InvalidGeometry(
                "vector must have a Y component".into(),
            ));
        }
    };

    let x = x.as_f64().ok_or(ClibError::ArgumentType {
        index: 1,
        expected: "number",
    })?;
    let y = y.as_f64().ok_or(ClibError::ArgumentType {
        index: 2,
        expected: "number",
    })?;

    Ok(Vec2::new(x as f32, y as f32))
}

fn same_kind(a: &Value, b: &Value) -> bool {
    matches!(
        (a, b),
        (Value::Null, Value::Null)
            | (Value::Bool(_), Value::Bool(_))
            | (Value::Number(_), Value::Number(_))
            | (Value::String(_), Value::String(_))
            | (Value::Array(_), Value::Array(_))
            | (Value::Object(_), Value::Object(_))
    )
}
