// src/services/parser.rs

//! Feed parser.
//!
//! Walks `features[].properties.{mag,place,time,url}` and nothing else.
//! A broken top level fails the whole parse; a broken feature is skipped.

use serde_json::{Map, Value};

use crate::error::{AppError, Result};
use crate::models::Earthquake;

/// Parse a feed body into earthquakes, in feed order.
///
/// Blank input is [`AppError::EmptyFeed`], which callers can tell apart from
/// a feed that parsed fine but listed nothing (`Ok(vec![])`).
pub fn parse_feed(text: &str) -> Result<Vec<Earthquake>> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyFeed);
    }

    let root: Value = serde_json::from_str(text).inspect_err(|e| {
        log::error!("Problem parsing the earthquake JSON results: {e}");
    })?;

    let features = root
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::parse("missing top-level \"features\" array"))
        .inspect_err(|e| log::error!("Problem parsing the earthquake JSON results: {e}"))?;

    let mut earthquakes = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        match parse_feature(feature) {
            Ok(quake) => earthquakes.push(quake),
            Err(reason) => log::warn!("Skipping feature {index}: {reason}"),
        }
    }

    log::debug!(
        "Parsed {} of {} features",
        earthquakes.len(),
        features.len()
    );
    Ok(earthquakes)
}

fn parse_feature(feature: &Value) -> std::result::Result<Earthquake, &'static str> {
    let properties = feature
        .get("properties")
        .and_then(Value::as_object)
        .ok_or("no \"properties\" object")?;

    let magnitude = properties.get("mag").and_then(Value::as_f64).unwrap_or(0.0);
    let place = properties
        .get("place")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let time_ms = read_time(properties).ok_or("missing or invalid \"time\"")?;
    let url = properties
        .get("url")
        .and_then(Value::as_str)
        .ok_or("missing or invalid \"url\"")?;

    Ok(Earthquake::new(magnitude, place, time_ms, url))
}

/// `time` must be an integer; whole-valued floats are accepted too.
fn read_time(properties: &Map<String, Value>) -> Option<i64> {
    let value = properties.get("time")?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|t| t.fract() == 0.0 && t.abs() < i64::MAX as f64)
            .map(|t| t as i64)
    })
}
