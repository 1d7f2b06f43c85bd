// crates/lockdown-core/src/writer.rs

//! # Writer
//!
//! Serializes the record mapping: object keys sorted at every depth,
//! 4-space indentation, UTF-8, no trailing newline.

use crate::error::{LockdownError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "lockdowns.json";

const INDENT: &[u8] = b"    ";

/// Rebuild every object with its keys in sorted order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sort_keys(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Write ANY serializable value in the output format.
pub fn write_sorted<T: Serialize, W: Write>(writer: W, data: &T) -> Result<()> {
    let value = sort_keys(serde_json::to_value(data)?);
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    ser.into_inner().flush().map_err(LockdownError::Io)
}

pub fn to_sorted_string<T: Serialize>(data: &T) -> Result<String> {
    let mut buf = Vec::new();
    write_sorted(&mut buf, data)?;
    String::from_utf8(buf).map_err(|e| LockdownError::InvalidData(e.to_string()))
}

/// Write `data` to `path`, replacing any existing file.
pub fn write_json_file<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let file = File::create(path).map_err(LockdownError::Io)?;
    write_sorted(BufWriter::new(file), data)?;
    info!(path = %path.display(), "output written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_keys_are_sorted_with_four_space_indent() {
        let data = json!({"b": {"z": 1, "a": [{"y": 2, "x": 3}]}, "a": "first"});
        let out = to_sorted_string(&data).unwrap();
        let expected = concat!(
            "{\n",
            "    \"a\": \"first\",\n",
            "    \"b\": {\n",
            "        \"a\": [\n",
            "            {\n",
            "                \"x\": 3,\n",
            "                \"y\": 2\n",
            "            }\n",
            "        ],\n",
            "        \"z\": 1\n",
            "    }\n",
            "}"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn struct_fields_are_sorted_too() {
        #[derive(Serialize)]
        struct Rec {
            zeta: u8,
            alpha: u8,
        }
        let out = to_sorted_string(&Rec { zeta: 1, alpha: 2 }).unwrap();
        assert!(out.find("alpha").unwrap() < out.find("zeta").unwrap());
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        std::fs::write(&path, "stale content that is longer than the new one").unwrap();
        write_json_file(&path, &json!({"k": 1})).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\n    \"k\": 1\n}");
    }
}
