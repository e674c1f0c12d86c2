/*!
A database of clauses, partitioned into a working set and a frontier.

The partition supports round-based saturation:

- The *working set* holds the clauses paired against each other during a round.
- The *frontier* holds the clauses derived during a round.

When a round concludes the frontier is merged into the working set, and a fresh round begins,
until some round leaves the frontier empty.

Clauses are keyed by their [canonical form](crate::structures::term::Term::canonical), computed
once when the clause is stored.
A clause whose canonical form is already present, in either part, is not stored again, so the
database holds each clause exactly once and in order of first derivation.
*/

use indexmap::IndexMap;

use crate::{
    builder::ClauseOk,
    config::Config,
    context::callbacks::{CallbackOnClause, CallbackOnResolvent},
    misc::log::targets,
    structures::term::Term,
    types::err,
};

pub mod callbacks;

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause of the formula as given.
    Original,

    /// A clause derived by resolution.
    Resolution,
}

/// A stored clause, together with its source.
#[allow(non_camel_case_types)]
pub struct dbClause {
    term: Term,
    source: ClauseSource,
}

impl dbClause {
    /// The clause stored.
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// The source of the clause stored.
    pub fn source(&self) -> ClauseSource {
        self.source
    }
}

/// A database of clauses.
pub struct ClauseDB {
    /// Clauses paired against each other during a round, keyed by canonical form.
    working: IndexMap<String, dbClause>,

    /// Clauses derived during the present round, keyed by canonical form.
    frontier: IndexMap<String, dbClause>,

    /// An upper limit on the count of clauses stored, across both parts.
    clause_limit: Option<usize>,

    /// A callback to make on storing a resolvent.
    callback_resolvent: Option<Box<CallbackOnResolvent>>,

    /// A callback to make on storing the empty clause.
    callback_unsatisfiable: Option<Box<CallbackOnClause>>,
}

impl ClauseDB {
    /// A fresh, empty, database, with limits taken from the given configuration.
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            working: IndexMap::default(),
            frontier: IndexMap::default(),
            clause_limit: config.clause_limit,
            callback_resolvent: None,
            callback_unsatisfiable: None,
        }
    }

    /// Stores a clause, if no clause with the same canonical form is already present.
    ///
    /// Original clauses join the working set and derived clauses join the frontier, to be
    /// merged when the round concludes.
    ///
    /// Returns an error if storing the clause would pass the clause limit.
    pub fn store(&mut self, term: Term, source: ClauseSource) -> Result<ClauseOk, err::ErrorKind> {
        let canonical = term.canonical();

        if self.contains(&canonical) {
            return Ok(ClauseOk::Duplicate);
        }

        if self.at_capacity() {
            return Err(err::ErrorKind::ClauseDB(err::ClauseDBError::StorageExhausted));
        }

        log::trace!(target: targets::CLAUSE_DB, "Stored [{source:?}]: {canonical}");

        let clause = dbClause { term, source };
        match source {
            ClauseSource::Original => self.working.insert(canonical, clause),
            ClauseSource::Resolution => self.frontier.insert(canonical, clause),
        };

        Ok(ClauseOk::Added)
    }

    /// Merges the frontier into the working set, leaving the frontier empty.
    ///
    /// Merged clauses follow the working set in first-derivation order.
    pub fn merge_frontier(&mut self) {
        if !self.frontier.is_empty() {
            log::trace!(
                target: targets::CLAUSE_DB,
                "Merging {} frontier clause(s)",
                self.frontier.len()
            );

            let frontier = std::mem::take(&mut self.frontier);
            self.working.extend(frontier);
        }
    }

    /// Whether a clause with the given canonical form is present, in either part.
    pub fn contains(&self, canonical: &str) -> bool {
        self.working.contains_key(canonical) || self.frontier.contains_key(canonical)
    }

    /// Whether the clause limit blocks storing a further clause.
    pub fn at_capacity(&self) -> bool {
        match self.clause_limit {
            Some(limit) => self.working.len() + self.frontier.len() >= limit,
            None => false,
        }
    }

    /// The count of clauses in the working set.
    pub fn clause_count(&self) -> usize {
        self.working.len()
    }

    /// The count of clauses in the frontier.
    pub fn frontier_count(&self) -> usize {
        self.frontier.len()
    }

    /// The clauses of the working set, in order of first derivation.
    pub fn clauses(&self) -> impl Iterator<Item = &Term> {
        self.working.values().map(dbClause::term)
    }

    /// The canonical forms of the working set, in order of first derivation.
    pub fn canonical_forms(&self) -> impl Iterator<Item = &str> {
        self.working.keys().map(String::as_str)
    }

    /// The stored clauses of the working set, with sources.
    pub fn db_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.working.values()
    }

    /// A copy of the working set, fixed for pairing while fresh resolvents are stored.
    pub(crate) fn snapshot(&self) -> Vec<(String, Term)> {
        self.working
            .iter()
            .map(|(canonical, clause)| (canonical.clone(), clause.term.clone()))
            .collect()
    }
}
