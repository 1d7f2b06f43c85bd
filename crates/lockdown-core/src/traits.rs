// crates/lockdown-core/src/traits.rs
use crate::error::Result;
use crate::model::{Asn, EyeballEntry};
use crate::network::HegemonyRecord;
use crate::text::{fold_key, starts_with_words};
use chrono::NaiveDate;

/// Name-based matching helpers for types that expose a canonical display name
/// plus alternative spellings.
///
/// Comparisons are accent-insensitive and case-insensitive, based on
/// [`fold_key`]. Implementors provide the canonical name and any aliases;
/// the helpers check all of them.
///
/// # Examples
/// ```rust
/// use lockdown_core::traits::NameMatch;
///
/// struct Place(&'static str, Vec<String>);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
///     fn alias_strs(&self) -> &[String] { &self.1 }
/// }
///
/// let p = Place("Côte d'Ivoire", vec!["Ivory Coast".into()]);
/// assert_eq!(p.longest_prefix_of("IVORY COAST Abidjan"), Some(11));
/// assert_eq!(p.longest_prefix_of("Cote d'Ivoire"), Some(13));
/// assert_eq!(p.longest_prefix_of("Northern Ivory Coast"), None);
/// assert_eq!(p.longest_prefix_of("Ivory"), None);
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Alternative spellings. Empty by default.
    fn alias_strs(&self) -> &[String] {
        &[]
    }

    /// Folded forms of the name and every alias.
    fn folded_names(&self) -> Vec<String> {
        std::iter::once(self.name_str())
            .chain(self.alias_strs().iter().map(String::as_str))
            .map(fold_key)
            .filter(|k| !k.is_empty())
            .collect()
    }

    /// Folded length of the longest name or alias that forms the leading
    /// words of `q`, if any.
    fn longest_prefix_of(&self, q: &str) -> Option<usize> {
        let q = fold_key(q);
        self.folded_names()
            .into_iter()
            .filter(|n| starts_with_words(&q, n))
            .map(|n| n.len())
            .max()
    }
}

/// The two remote data services used to enrich a country record.
///
/// The HTTP implementation lives in [`crate::network::HttpNetworkSource`];
/// tests plug in canned data.
pub trait NetworkSource {
    /// Ranked eyeball networks for a country, at most `top` of them.
    fn eyeball_networks(&self, cc: &str, top: usize) -> Result<Vec<EyeballEntry>>;

    /// All hegemony records with `origin` as origin AS on `date`, every page.
    fn hegemony(&self, origin: Asn, date: NaiveDate) -> Result<Vec<HegemonyRecord>>;
}
