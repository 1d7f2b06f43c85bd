// crates/lockdown-core/src/countries.rs

//! # Country Resolver
//!
//! Maps free-text country names to ISO2 codes and continents using the
//! reference name database bundled in `data/countries.json`.

use crate::error::{LockdownError, Result};
use crate::text::fold_key;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One country of the reference name database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub iso2: String,
    pub iso3: String,
    pub name: String,
    pub continent: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl NameMatch for CountryEntry {
    fn name_str(&self) -> &str {
        &self.name
    }

    fn alias_strs(&self) -> &[String] {
        &self.aliases
    }
}

/// A successful lookup: the name that matched plus the canonical codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The query text that resolved (`"United Kingdom"`, not `"United"`).
    pub name: String,
    pub cc: String,
    pub continent: String,
}

/// The reference name database, indexed by folded name and alias.
#[derive(Debug, Clone)]
pub struct CountryDb {
    entries: Vec<CountryEntry>,
    by_name: HashMap<String, usize>,
}

impl CountryDb {
    /// Build the database, rejecting entries without a usable ISO2 code.
    pub fn from_entries(entries: Vec<CountryEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(LockdownError::InvalidData("country dataset is empty".into()));
        }

        let mut by_name = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            let valid_iso2 =
                entry.iso2.len() == 2 && entry.iso2.chars().all(|c| c.is_ascii_uppercase());
            if !valid_iso2 {
                return Err(LockdownError::InvalidData(format!(
                    "invalid ISO2 code {:?} for {}",
                    entry.iso2, entry.name
                )));
            }
            for key in entry.folded_names() {
                by_name.entry(key).or_insert(idx);
            }
        }

        Ok(Self { entries, by_name })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<CountryEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn countries(&self) -> &[CountryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a country by ISO2 code, case-insensitive (e.g. "DE", "us").
    pub fn find_by_iso2(&self, iso2: &str) -> Option<&CountryEntry> {
        self.entries
            .iter()
            .find(|c| c.iso2.eq_ignore_ascii_case(iso2.trim()))
    }

    /// Look a free-text name up.
    ///
    /// Order of precedence:
    /// 1. exact folded match on a name or alias,
    /// 2. an upper-case two- or three-letter query matching an ISO2 or ISO3 code,
    /// 3. the longest name or alias forming the leading words of the query
    ///    (`"South Sudan Juba"`). Words in front of a name are never skipped,
    ///    so `"Northern Cyprus"` does not match Cyprus. Two different
    ///    countries tying for longest is no match.
    pub fn lookup(&self, query: &str) -> Option<&CountryEntry> {
        let query = query.trim();
        let key = fold_key(query);
        if key.is_empty() {
            return None;
        }

        if let Some(&idx) = self.by_name.get(&key) {
            return Some(&self.entries[idx]);
        }

        if query.chars().all(|c| c.is_ascii_uppercase()) {
            let by_code = match query.len() {
                2 => self.find_by_iso2(query),
                3 => self.entries.iter().find(|c| c.iso3 == query),
                _ => None,
            };
            if by_code.is_some() {
                return by_code;
            }
        }

        let mut best: Option<(usize, &CountryEntry)> = None;
        let mut tied = false;
        for entry in &self.entries {
            let Some(len) = entry.longest_prefix_of(&key) else {
                continue;
            };
            match best {
                Some((best_len, _)) if len < best_len => {}
                Some((best_len, current)) if len == best_len => {
                    tied |= current.iso2 != entry.iso2;
                }
                _ => {
                    best = Some((len, entry));
                    tied = false;
                }
            }
        }

        match best {
            Some((_, entry)) if !tied => Some(entry),
            _ => None,
        }
    }

    /// Resolve a parsed place: the bare country first, then once more with
    /// the subdivision appended (multi-word names arrive split).
    pub fn resolve(&self, country: &str, subdivision: Option<&str>) -> Option<Resolution> {
        let attempt = |name: String| {
            self.lookup(&name).map(|entry| Resolution {
                name,
                cc: entry.iso2.clone(),
                continent: entry.continent.clone(),
            })
        };

        attempt(country.to_string()).or_else(|| {
            let sub = subdivision.filter(|s| !s.trim().is_empty())?;
            attempt(format!("{country} {sub}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> &'static CountryDb {
        CountryDb::bundled().expect("bundled dataset loads")
    }

    #[test]
    fn bundled_dataset_is_complete() {
        assert!(db().len() >= 249);
        assert_eq!(db().find_by_iso2("fr").map(|c| c.name.as_str()), Some("France"));
    }

    #[test]
    fn exact_names_and_aliases() {
        assert_eq!(db().lookup("France").unwrap().iso2, "FR");
        assert_eq!(db().lookup("ivory coast").unwrap().iso2, "CI");
        assert_eq!(db().lookup("Côte d’Ivoire").unwrap().iso2, "CI");
        assert_eq!(db().lookup("Czechia").unwrap().iso2, "CZ");
        assert_eq!(db().lookup("USA").unwrap().iso2, "US");
    }

    #[test]
    fn codes_resolve_only_in_upper_case() {
        assert_eq!(db().lookup("DE").unwrap().iso2, "DE");
        assert_eq!(db().lookup("NZL").unwrap().iso2, "NZ");
        assert!(db().lookup("de").is_none());
    }

    #[test]
    fn leading_names_prefer_the_longest() {
        assert_eq!(db().lookup("Papua New Guinea").unwrap().iso2, "PG");
        assert_eq!(db().lookup("South Sudan Juba").unwrap().iso2, "SS");
        assert_eq!(db().lookup("Guinea-Bissau Bafata").unwrap().iso2, "GW");
        assert_eq!(db().lookup("Guinea Conakry").unwrap().iso2, "GN");
    }

    #[test]
    fn leading_qualifiers_are_not_skipped() {
        assert_eq!(db().lookup("Northern Ireland").unwrap().iso2, "GB");
        assert_eq!(db().lookup("Democratic Republic of Congo").unwrap().iso2, "CD");
        assert_eq!(db().lookup("DR of Congo").unwrap().iso2, "CD");
        assert_eq!(db().lookup("Republic of the Congo").unwrap().iso2, "CG");
        assert!(db().lookup("Northern Cyprus").is_none());
        assert!(db().lookup("Republic of Niger").is_none());
    }

    #[test]
    fn fragments_do_not_resolve() {
        assert!(db().lookup("United").is_none());
        assert!(db().lookup("South").is_none());
        assert!(db().lookup("").is_none());
    }

    #[test]
    fn resolve_retries_with_subdivision() {
        let r = db().resolve("United", Some("Kingdom")).unwrap();
        assert_eq!(r.name, "United Kingdom");
        assert_eq!(r.cc, "GB");
        assert_eq!(r.continent, "Europe");

        let r = db().resolve("Italy", Some("Lombardy")).unwrap();
        assert_eq!(r.name, "Italy");
        assert_eq!(r.cc, "IT");

        assert!(db().resolve("Atlantis", Some("Poseidonia")).is_none());
        assert!(db().resolve("United", None).is_none());
    }

    #[test]
    fn rejects_bad_iso2() {
        let err = CountryDb::from_json_str(
            r#"[{"iso2":"fra","iso3":"FRA","name":"France","continent":"Europe"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, LockdownError::InvalidData(_)));
        assert!(CountryDb::from_json_str("[]").is_err());
    }
}
