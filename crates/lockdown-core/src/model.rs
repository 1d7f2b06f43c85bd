// crates/lockdown-core/src/model.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Autonomous system number.
pub type Asn = u32;

/// One parsed table line, before scope filtering and country resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub country: String,
    pub subdivision: Option<String>,
    pub start: NaiveDate,
    /// Footnote-stripped end token. Absent when the row carries a single date.
    pub end: Option<String>,
    pub scope: String,
}

/// A calendar week, Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
}

/// The two comparison windows derived from a lockdown start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringDates {
    pub lockdown: Week,
    pub before: Week,
}

/// A peer AS that an eyeball network depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyEntry {
    pub asn: Asn,
    pub name: String,
    pub hege: f64,
}

/// An access network ranked by the eyeball service for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyeballEntry {
    pub asn: Asn,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dependency: Vec<DependencyEntry>,
    /// Remaining fields of the service response, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl EyeballEntry {
    pub fn new(asn: Asn, name: impl Into<String>) -> Self {
        Self {
            asn,
            name: name.into(),
            dependency: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}

/// The per-country output record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub cc: String,
    pub continent: String,
    pub start: NaiveDate,
    pub end: Option<String>,
    pub scope: String,
    pub eyeball: Vec<EyeballEntry>,
    pub monitoring_dates: MonitoringDates,
}
