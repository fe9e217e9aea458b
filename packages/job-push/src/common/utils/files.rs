use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{JobPushError, Result};

/// Read and deserialize a JSON file that must exist.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(JobPushError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|source| JobPushError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| JobPushError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize to pretty JSON (two-space indent, UTF-8 unescaped) and write.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| JobPushError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json + "\n").map_err(|source| JobPushError::Io {
        path: path.to_path_buf(),
        source,
    })
}
