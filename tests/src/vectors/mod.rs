//! Loads known-answer vectors from TOML files.

use num_bigint::BigUint;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid hex in {field}: {value}")]
    Hex { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, VectorError>;

/// `k·G = (x, y)`
#[derive(Debug, Deserialize)]
pub struct ScalarMultVector {
    pub k: String,
    pub x: String,
    pub y: String,
}

/// Two parties with scalars `a` and `b` agree on `shared_x`.
#[derive(Debug, Deserialize)]
pub struct ExchangeVector {
    pub a: String,
    pub b: String,
    pub shared_x: String,
}

#[derive(Debug, Deserialize)]
pub struct VectorFile {
    pub curve: String,
    #[serde(default)]
    pub scalar_mult: Vec<ScalarMultVector>,
    #[serde(default)]
    pub exchange: Vec<ExchangeVector>,
}

fn vector_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("vectors")
}

/// Load `src/vectors/<name>.toml`.
pub fn load(name: &str) -> Result<VectorFile> {
    let path = vector_dir().join(format!("{}.toml", name));
    let text = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| VectorError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Parse a big-endian hex field of a vector.
pub fn big(field: &'static str, value: &str) -> Result<BigUint> {
    BigUint::parse_bytes(value.as_bytes(), 16).ok_or_else(|| VectorError::Hex {
        field,
        value: value.to_string(),
    })
}
