use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::SeismicEvent;

const NULL_TEXT: &str = "null";

/// The body did not match the GeoJSON shape the report relies on.
#[derive(Debug, Error, PartialEq)]
pub enum StructureError {
    #[error("body is not valid JSON: {0}")]
    Syntax(String),
    #[error("missing `{0}`")]
    Missing(String),
    #[error("`{path}` should be {expected}")]
    WrongType {
        path: String,
        expected: &'static str,
    },
}

/// Match `features[*].properties.{place,mag,time}` and build events in array order.
pub fn parse_features(body: &str) -> Result<Vec<SeismicEvent>, StructureError> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| StructureError::Syntax(e.to_string()))?;
    let root = root.as_object().ok_or_else(|| StructureError::WrongType {
        path: "$".into(),
        expected: "an object",
    })?;

    let features = root
        .get("features")
        .ok_or_else(|| StructureError::Missing("features".into()))?
        .as_array()
        .ok_or_else(|| StructureError::WrongType {
            path: "features".into(),
            expected: "an array",
        })?;

    features
        .iter()
        .enumerate()
        .map(|(idx, feature)| parse_feature(idx, feature))
        .collect()
}

fn parse_feature(idx: usize, feature: &Value) -> Result<SeismicEvent, StructureError> {
    let base = format!("features[{idx}]");
    let feature = as_object(feature, &base)?;

    let props_path = format!("{base}.properties");
    let props = feature
        .get("properties")
        .ok_or_else(|| StructureError::Missing(props_path.clone()))?;
    let props = as_object(props, &props_path)?;

    // A null value is kept: text fields show as `null`, magnitude as 0.0.
    let place = match field(props, &props_path, "place")? {
        Value::String(s) => s.clone(),
        Value::Null => NULL_TEXT.to_string(),
        _ => return Err(wrong_type(&props_path, "place", "a string or null")),
    };

    let magnitude = match field(props, &props_path, "mag")? {
        Value::Null => 0.0,
        other => other
            .as_f64()
            .ok_or_else(|| wrong_type(&props_path, "mag", "a number or null"))?,
    };

    let occurred_at = match field(props, &props_path, "time")? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Null => NULL_TEXT.to_string(),
        _ => return Err(wrong_type(&props_path, "time", "a string, number or null")),
    };

    Ok(SeismicEvent {
        place,
        magnitude,
        occurred_at,
    })
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, StructureError> {
    value.as_object().ok_or_else(|| StructureError::WrongType {
        path: path.to_string(),
        expected: "an object",
    })
}

fn field<'a>(
    props: &'a Map<String, Value>,
    props_path: &str,
    key: &str,
) -> Result<&'a Value, StructureError> {
    props
        .get(key)
        .ok_or_else(|| StructureError::Missing(format!("{props_path}.{key}")))
}

fn wrong_type(props_path: &str, key: &str, expected: &'static str) -> StructureError {
    StructureError::WrongType {
        path: format!("{props_path}.{key}"),
        expected,
    }
}
