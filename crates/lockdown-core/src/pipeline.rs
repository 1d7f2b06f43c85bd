// crates/lockdown-core/src/pipeline.rs

//! # Pipeline
//!
//! Parse -> classify -> enrich -> fold. Classification is offline and
//! yields a tagged [`LineOutcome`] per line; only accepted rows reach the
//! network. The record map is the fold output of [`Pipeline::run`].

use crate::common::RunStats;
use crate::countries::CountryDb;
use crate::error::Result;
use crate::model::CountryRecord;
use crate::network::{dependencies, origin_name};
use crate::parser::{parse_line, ParsedLine};
use crate::traits::NetworkSource;
use crate::window::monitoring_dates;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// The only scope that is kept.
pub const NATIONAL_SCOPE: &str = "National";

/// Why a line produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Comment,
    Malformed { reason: String },
    Scope { scope: String },
    Unresolved { name: String },
}

/// What classification decided for one line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// A record with resolved codes and dates, not yet enriched.
    Accepted(CountryRecord),
    Skipped(SkipReason),
}

/// Key used for the output mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordKey {
    /// The name that resolved, e.g. `"United Kingdom"`.
    #[default]
    Name,
    /// The ISO2 code.
    Cc,
}

impl RecordKey {
    pub fn key_for(&self, record: &CountryRecord) -> String {
        match self {
            RecordKey::Name => record.name.clone(),
            RecordKey::Cc => record.cc.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Number of eyeball networks requested per country.
    pub top: usize,
    pub key: RecordKey,
    /// Query hegemony scores for every eyeball network.
    pub dependencies: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top: 10,
            key: RecordKey::Name,
            dependencies: true,
        }
    }
}

/// A line that produced no record, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_no: usize,
    pub reason: SkipReason,
}

/// Everything a run produced.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub records: BTreeMap<String, CountryRecord>,
    pub skipped: Vec<SkippedLine>,
    /// Accepted lines, counting those whose record was later overwritten.
    pub accepted: usize,
}

impl Report {
    pub fn stats(&self) -> RunStats {
        let mut stats = RunStats {
            accepted: self.accepted,
            records: self.records.len(),
            ..RunStats::default()
        };
        for s in &self.skipped {
            match s.reason {
                SkipReason::Comment => stats.comments += 1,
                SkipReason::Malformed { .. } => stats.malformed += 1,
                SkipReason::Scope { .. } => stats.out_of_scope += 1,
                SkipReason::Unresolved { .. } => stats.unresolved += 1,
            }
        }
        stats
    }
}

/// Classify one line without touching the network.
pub fn classify_line(db: &CountryDb, line: &str) -> LineOutcome {
    let row = match parse_line(line) {
        ParsedLine::Row(row) => row,
        ParsedLine::Comment => return LineOutcome::Skipped(SkipReason::Comment),
        ParsedLine::Malformed { reason } => {
            return LineOutcome::Skipped(SkipReason::Malformed { reason })
        }
    };

    if row.scope != NATIONAL_SCOPE {
        return LineOutcome::Skipped(SkipReason::Scope { scope: row.scope });
    }

    let Some(resolved) = db.resolve(&row.country, row.subdivision.as_deref()) else {
        let name = match &row.subdivision {
            Some(sub) => format!("{} {}", row.country, sub),
            None => row.country,
        };
        return LineOutcome::Skipped(SkipReason::Unresolved { name });
    };

    LineOutcome::Accepted(CountryRecord {
        name: resolved.name,
        cc: resolved.cc,
        continent: resolved.continent,
        start: row.start,
        end: row.end,
        scope: row.scope,
        eyeball: Vec::new(),
        monitoring_dates: monitoring_dates(row.start),
    })
}

/// Attach eyeball networks and, if configured, their dependencies.
pub fn enrich_record<S: NetworkSource + ?Sized>(
    source: &S,
    record: &mut CountryRecord,
    config: &PipelineConfig,
) -> Result<()> {
    record.eyeball = source.eyeball_networks(&record.cc, config.top)?;
    if !config.dependencies {
        return Ok(());
    }

    for entry in &mut record.eyeball {
        let scores = source.hegemony(entry.asn, record.start)?;
        entry.dependency = dependencies(entry.asn, &scores);
        if let Some(name) = origin_name(entry.asn, &scores) {
            entry.name = name;
        }
    }
    Ok(())
}

pub struct Pipeline<'a, S: NetworkSource + ?Sized> {
    db: &'a CountryDb,
    source: &'a S,
    config: PipelineConfig,
}

impl<'a, S: NetworkSource + ?Sized> Pipeline<'a, S> {
    pub fn new(db: &'a CountryDb, source: &'a S, config: PipelineConfig) -> Self {
        Self { db, source, config }
    }

    /// Process every line in order. The first remote failure aborts the run.
    pub fn run<I, L>(&self, lines: I) -> Result<Report>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut report = Report::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line_no = idx + 1;
            match classify_line(self.db, line.as_ref()) {
                LineOutcome::Accepted(mut record) => {
                    info!(line_no, name = %record.name, cc = %record.cc, "enriching");
                    enrich_record(self.source, &mut record, &self.config)?;
                    report.accepted += 1;

                    let key = self.config.key.key_for(&record);
                    if report.records.insert(key.clone(), record).is_some() {
                        warn!(line_no, %key, "record overwritten by a later line");
                    }
                }
                LineOutcome::Skipped(reason) => {
                    debug!(line_no, ?reason, "line skipped");
                    report.skipped.push(SkippedLine { line_no, reason });
                }
            }
        }

        let stats = report.stats();
        info!(
            records = stats.records,
            out_of_scope = stats.out_of_scope,
            unresolved = stats.unresolved,
            malformed = stats.malformed,
            "pipeline finished"
        );
        Ok(report)
    }
}
