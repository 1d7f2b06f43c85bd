// crates/lockdown-core/src/lib.rs

//! lockdown-core
//! =============
//!
//! Turns a lockdown table pasted from a wiki page into a country-keyed JSON
//! document enriched with eyeball-network dependency data.
//!
//! The pipeline, one pass per input line:
//!
//! 1. [`parser`]: split a line into country, subdivision, dates and scope.
//! 2. [`countries`]: resolve the name to an ISO2 code and continent.
//! 3. [`window`]: derive the lockdown week and the baseline week.
//! 4. [`network`]: fetch eyeball networks and their hegemony dependencies.
//! 5. [`writer`]: write the sorted mapping.
//!
//! [`pipeline`] ties the stages together.
//!
//! ```rust
//! use lockdown_core::prelude::*;
//!
//! let db = CountryDb::bundled()?;
//! match classify_line(db, "France 2020-03-17 2020-05-11 National") {
//!     LineOutcome::Accepted(record) => {
//!         assert_eq!(record.cc, "FR");
//!         assert_eq!(record.monitoring_dates.before.monday.to_string(), "2020-02-17");
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! # Ok::<(), lockdown_core::LockdownError>(())
//! ```

pub mod common;
pub mod countries;
pub mod error;
pub mod loader;
pub mod model;
pub mod network;
pub mod parser;
pub mod pipeline;
pub mod prelude;
pub mod text;
pub mod traits;
pub mod window;
pub mod writer;

// Re-exports
pub use crate::common::RunStats;
pub use crate::countries::{CountryDb, CountryEntry, Resolution};
pub use crate::error::{LockdownError, Result};
pub use crate::model::{
    Asn, CountryRecord, DependencyEntry, EyeballEntry, MonitoringDates, RawRow, Week,
};
pub use crate::pipeline::{LineOutcome, Pipeline, PipelineConfig, RecordKey, Report, SkipReason};
pub use crate::traits::{NameMatch, NetworkSource};
