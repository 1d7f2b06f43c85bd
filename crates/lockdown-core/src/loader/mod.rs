// crates/lockdown-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) for the country dataset
//! and the pasted lockdown table, and keeps the bundled dataset cached for
//! the lifetime of the process.

use crate::countries::CountryDb;
use crate::error::Result;
use once_cell::sync::OnceCell;
use std::path::Path;
use tracing::debug;

mod common_io;

pub use common_io::{open_stream, read_lines};

/// The reference name database compiled into the crate.
pub const BUNDLED_DATASET: &str = include_str!("../../data/countries.json");

static COUNTRY_DB_CACHE: OnceCell<CountryDb> = OnceCell::new();

impl CountryDb {
    /// The bundled dataset, parsed once per process.
    pub fn bundled() -> Result<&'static CountryDb> {
        COUNTRY_DB_CACHE.get_or_try_init(|| {
            let db = CountryDb::from_json_str(BUNDLED_DATASET)?;
            debug!(countries = db.len(), "loaded bundled country dataset");
            Ok(db)
        })
    }

    /// Load a custom dataset (`.json`, or `.json.gz` with the `compact`
    /// feature) with the same shape as the bundled one.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<CountryDb> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let entries = serde_json::from_reader(reader)?;
        let db = CountryDb::from_entries(entries)?;
        debug!(countries = db.len(), path = %path.display(), "loaded country dataset");
        Ok(db)
    }
}
