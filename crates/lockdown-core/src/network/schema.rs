// crates/lockdown-core/src/network/schema.rs

//! Response validation at the service boundary.
//!
//! Bodies are checked here and turned into typed values. A body that parses
//! as JSON but has the wrong shape is a [`LockdownError::Schema`], distinct
//! from transport failures.

use super::{HegemonyRecord, EYEBALL_SERVICE, HEGEMONY_SERVICE};
use crate::error::{LockdownError, Result};
use crate::model::{Asn, EyeballEntry};
use serde::Deserialize;
use serde_json::{Map, Value};

const ASN_KEYS: &[&str] = &["asn", "as", "autnum"];
const NAME_KEYS: &[&str] = &["name", "as_name", "as-name", "asname"];

fn schema_error(service: &'static str, detail: impl Into<String>) -> LockdownError {
    LockdownError::Schema {
        service,
        detail: detail.into(),
    }
}

/// Accepts `3215`, `"3215"` and `"AS3215"`.
fn asn_from_value(value: &Value) -> Option<Asn> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| Asn::try_from(n).ok()),
        Value::String(s) => {
            let s = s.trim();
            let digits = s
                .strip_prefix("AS")
                .or_else(|| s.strip_prefix("as"))
                .unwrap_or(s);
            digits.parse().ok()
        }
        _ => None,
    }
}

fn eyeball_entry(idx: usize, mut obj: Map<String, Value>) -> Result<EyeballEntry> {
    let asn_key = ASN_KEYS
        .iter()
        .find(|k| obj.contains_key(**k))
        .ok_or_else(|| schema_error(EYEBALL_SERVICE, format!("entry {idx} has no AS number")))?;
    let raw_asn = obj.remove(*asn_key).unwrap_or(Value::Null);
    let asn = asn_from_value(&raw_asn).ok_or_else(|| {
        schema_error(
            EYEBALL_SERVICE,
            format!("entry {idx} has an invalid AS number: {raw_asn}"),
        )
    })?;

    let mut name = String::new();
    for key in NAME_KEYS {
        if let Some(value) = obj.remove(*key) {
            if name.is_empty() {
                if let Value::String(s) = value {
                    name = s.trim().to_string();
                }
            }
        }
    }
    // Everything else is passed through, minus keys we own.
    for key in ASN_KEYS {
        obj.remove(*key);
    }
    obj.remove("dependency");

    let mut entry = EyeballEntry::new(asn, name);
    entry.extra = obj.into_iter().collect();
    Ok(entry)
}

/// Validate an eyeball-service body: a JSON array of objects, each carrying
/// an AS number. At most `top` entries are kept, in service order.
pub fn parse_eyeball_body(body: &str, top: usize) -> Result<Vec<EyeballEntry>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| schema_error(EYEBALL_SERVICE, format!("body is not JSON: {e}")))?;
    let Value::Array(items) = value else {
        return Err(schema_error(EYEBALL_SERVICE, "expected a JSON array"));
    };

    items
        .into_iter()
        .take(top)
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(obj) => eyeball_entry(idx, obj),
            other => Err(schema_error(
                EYEBALL_SERVICE,
                format!("entry {idx} is not an object: {other}"),
            )),
        })
        .collect()
}

/// One page of the hegemony service.
#[derive(Debug, Clone, Deserialize)]
pub struct HegemonyPage {
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<HegemonyRecord>,
}

pub fn parse_hegemony_page(body: &str) -> Result<HegemonyPage> {
    serde_json::from_str(body).map_err(|e| schema_error(HEGEMONY_SERVICE, e.to_string()))
}
