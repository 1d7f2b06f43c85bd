// crates/lockdown-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for one pipeline run.
///
/// Returned by [`crate::pipeline::Report::stats`], these counts cover every
/// input line: each line is either accepted or skipped for exactly one
/// reason. `records` can be lower than `accepted` when a key recurs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub accepted: usize,
    pub records: usize,
    pub comments: usize,
    pub malformed: usize,
    pub out_of_scope: usize,
    pub unresolved: usize,
}

impl RunStats {
    pub fn lines(&self) -> usize {
        self.accepted + self.comments + self.malformed + self.out_of_scope + self.unresolved
    }
}
