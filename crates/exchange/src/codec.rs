//! JSON encoding of public points
//!
//! A point travels as `{"X": "<hex>", "Y": "<hex>"}` with each coordinate
//! written as big-endian lowercase hex. The identity is `{"X": null, "Y": null}`.

use dhec_algorithms::Point;
use dhec_api::{Error, Result};
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct WirePoint {
    #[serde(rename = "X", deserialize_with = "present")]
    x: Option<String>,
    #[serde(rename = "Y", deserialize_with = "present")]
    y: Option<String>,
}

/// Require the field to be present, while still allowing `null`.
fn present<'de, D>(deserializer: D) -> core::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

fn coordinate_to_hex(v: &BigUint) -> String {
    hex::encode(v.to_bytes_be())
}

fn coordinate_from_hex(name: &str, s: &str) -> Result<BigUint> {
    if s.is_empty() {
        return Err(Error::serialization(
            "point decoding",
            format!("{} coordinate is empty", name),
        ));
    }
    let bytes = hex::decode(s).map_err(|e| {
        Error::serialization("point decoding", format!("{} coordinate: {}", name, e))
    })?;
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Serialize a point to its JSON payload.
pub fn encode_point(point: &Point) -> Result<Vec<u8>> {
    let wire = match point {
        Point::Identity => WirePoint { x: None, y: None },
        Point::Affine { x, y } => WirePoint {
            x: Some(coordinate_to_hex(x)),
            y: Some(coordinate_to_hex(y)),
        },
    };
    serde_json::to_vec(&wire).map_err(|e| Error::serialization("point encoding", e.to_string()))
}

/// Parse a point from its JSON payload.
///
/// Only the encoding is checked; the point is not checked against any curve.
pub fn decode_point(bytes: &[u8]) -> Result<Point> {
    let wire: WirePoint = serde_json::from_slice(bytes)
        .map_err(|e| Error::serialization("point decoding", e.to_string()))?;

    match (wire.x, wire.y) {
        (None, None) => Ok(Point::Identity),
        (Some(x), Some(y)) => Ok(Point::affine(
            coordinate_from_hex("X", &x)?,
            coordinate_from_hex("Y", &y)?,
        )),
        _ => Err(Error::serialization(
            "point decoding",
            "only one coordinate is null",
        )),
    }
}
