//! lockdown-core prelude: bring common types and traits into scope.

#![allow(unused_imports)]

pub use crate::common::RunStats;
pub use crate::countries::{CountryDb, CountryEntry, Resolution};
pub use crate::error::{LockdownError, Result};
pub use crate::model::{
    Asn, CountryRecord, DependencyEntry, EyeballEntry, MonitoringDates, RawRow, Week,
};
pub use crate::network::HegemonyRecord;
#[cfg(feature = "http")]
pub use crate::network::{Endpoints, HttpNetworkSource};
pub use crate::pipeline::{
    classify_line, enrich_record, LineOutcome, Pipeline, PipelineConfig, RecordKey, Report,
    SkipReason, SkippedLine,
};
pub use crate::text::{fold_key, strip_reference};
pub use crate::traits::{NameMatch, NetworkSource};
pub use crate::window::monitoring_dates;
pub use crate::writer::{to_sorted_string, write_json_file};
