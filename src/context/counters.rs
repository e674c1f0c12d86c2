//! Counters, over the life of a context.

use std::time::Duration;

use serde::Serialize;

/// Counters over the life of a context.
#[derive(Clone, Debug, Serialize)]
pub struct Counters {
    /// A count of saturation rounds begun.
    pub rounds: usize,

    /// A count of clause pairs examined for a resolvent.
    pub pairs: usize,

    /// A count of fresh resolvents stored.
    pub resolvents: usize,

    /// A count of resolvents dropped as duplicates of stored clauses.
    pub duplicates: usize,

    /// A count of resolvents discarded as tautologies.
    ///
    /// Touched only when tautologies are
    /// [discarded](crate::config::Config::discard_tautologies).
    pub tautologies: usize,

    /// Total time spent saturating.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            rounds: 0,
            pairs: 0,
            resolvents: 0,
            duplicates: 0,
            tautologies: 0,
            time: Duration::from_secs(0),
        }
    }
}
