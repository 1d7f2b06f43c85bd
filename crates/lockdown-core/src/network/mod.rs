// crates/lockdown-core/src/network/mod.rs

//! # Network Enrichment
//!
//! Wire types of the two data services, the dependency filter applied to
//! hegemony scores, and (with the `http` feature) the blocking HTTP client.

use crate::model::{Asn, DependencyEntry};
use serde::Deserialize;

pub mod schema;

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{Endpoints, HttpNetworkSource};

/// Scores at or below this are noise.
pub const HEGE_THRESHOLD: f64 = 0.01;

/// Default eyeball-ranking endpoint; `{cc}` and `{top}` are substituted.
pub const EYEBALL_URL_TEMPLATE: &str =
    "http://v6data.data.labs.apnic.net/ipv6-measurement/Economies/{cc}/{cc}.asns.json?m={top}";

/// Default hegemony endpoint (paginated).
pub const HEGEMONY_URL: &str = "https://ihr.iijlab.net/ihr/api/hegemony/";

pub(crate) const EYEBALL_SERVICE: &str = "eyeball";
pub(crate) const HEGEMONY_SERVICE: &str = "hegemony";

/// One row of the hegemony service: how much `originasn` depends on `asn`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HegemonyRecord {
    pub asn: Asn,
    #[serde(default)]
    pub asn_name: Option<String>,
    pub hege: f64,
    pub originasn: Asn,
    #[serde(default)]
    pub originasn_name: Option<String>,
}

/// Fill the eyeball URL template.
pub fn eyeball_url(template: &str, cc: &str, top: usize) -> String {
    template.replace("{cc}", cc).replace("{top}", &top.to_string())
}

/// Dependencies of `origin`: other ASes scoring above [`HEGE_THRESHOLD`].
///
/// One entry per AS, keeping its highest score, ordered by score (highest
/// first) then ASN.
pub fn dependencies(origin: Asn, records: &[HegemonyRecord]) -> Vec<DependencyEntry> {
    let mut out: Vec<DependencyEntry> = Vec::new();
    for r in records
        .iter()
        .filter(|r| r.originasn == origin && r.asn != origin && r.hege > HEGE_THRESHOLD)
    {
        match out.iter_mut().find(|d| d.asn == r.asn) {
            Some(existing) if existing.hege >= r.hege => {}
            Some(existing) => existing.hege = r.hege,
            None => out.push(DependencyEntry {
                asn: r.asn,
                name: r.asn_name.clone().unwrap_or_default(),
                hege: r.hege,
            }),
        }
    }
    out.sort_by(|a, b| b.hege.total_cmp(&a.hege).then(a.asn.cmp(&b.asn)));
    out
}

/// The origin AS display name reported by the hegemony service, if any.
pub fn origin_name(origin: Asn, records: &[HegemonyRecord]) -> Option<String> {
    records
        .iter()
        .filter(|r| r.originasn == origin)
        .filter_map(|r| r.originasn_name.as_deref())
        .map(str::trim)
        .find(|n| !n.is_empty())
        .map(str::to_string)
}
