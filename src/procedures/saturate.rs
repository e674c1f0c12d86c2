/*!
Saturation of a context, to a fixed point or the empty clause.

Saturation proceeds in rounds over a growing clause set.
During a round each (unordered) pair of distinct working clauses is examined for a resolvent,
and fresh resolvents are set aside in the frontier.
Between rounds the frontier is merged into the working set, so every resolvent is eventually
paired against every other clause.
Pairs of a previous round are examined afresh each round, with the derived clauses dropped as
duplicates, a cost accepted to keep rounds simple.

A sketch of the loop:

```text
'rounds:
    merge the frontier into the working set
    ? the empty clause was derived        -> conclude unsatisfiable
    ? termination was requested           -> conclude unknown
    examine each pair of working clauses
      - fresh resolvents join the frontier
      - the empty clause ends the examination
    ? the frontier is empty               -> conclude saturated
    continue 'rounds
```

The merge is made at the top of the loop, so on any conclusion the working set holds every
clause derived, the empty clause included.
*/

use std::time::Instant;

use crate::{
    builder::ClauseOk,
    config::Config,
    context::{Context, ContextState},
    db::clause::ClauseSource,
    misc::log::targets,
    procedures::resolution::{self, Resolution},
    reports::Report,
    structures::term::Term,
    types::err,
};

impl Context {
    /// Saturates the clause database under resolution.
    ///
    /// Concludes when the empty clause is derived, or the clause set is closed under the
    /// configured rule, or a set termination callback returns true.
    /// On interruption by callback the context remains in a saturating state, and a further
    /// call resumes where the attempt left off.
    ///
    /// Returns an error if a resolvent would pass the configured clause limit.
    pub fn saturate(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Saturated | ContextState::Unsatisfiable => return Ok(self.report()),

            ContextState::Input | ContextState::Saturating => {
                self.state = ContextState::Saturating;
            }
        }

        let saturation_time = Instant::now();

        'rounds: loop {
            self.clause_db.merge_frontier();

            if let ContextState::Unsatisfiable = self.state {
                break 'rounds;
            }

            if self.check_callback_terminate() {
                log::info!(target: targets::SATURATION, "Saturation interrupted");
                self.counters.time += saturation_time.elapsed();

                return Ok(Report::Unknown);
            }

            self.counters.rounds += 1;
            log::trace!(
                target: targets::SATURATION,
                "Round {} over {} clause(s)",
                self.counters.rounds,
                self.clause_db.clause_count()
            );

            let working = self.clause_db.snapshot();

            'scan: for left in 0..working.len() {
                for right in (left + 1)..working.len() {
                    self.counters.pairs += 1;

                    let (left_canonical, left_term) = &working[left];
                    let (right_canonical, right_term) = &working[right];

                    let resolvent = match resolution::resolve(left_term, right_term, &self.config)
                    {
                        Resolution::NoPair => continue,

                        Resolution::Tautology => {
                            self.counters.tautologies += 1;
                            continue;
                        }

                        Resolution::Resolvent(resolvent) => resolvent,
                    };

                    if self.clause_db.contains(&resolvent.canonical()) {
                        self.counters.duplicates += 1;
                        continue;
                    }

                    // Checked ahead of the callbacks, so a derivation is only reported once
                    // storage for it is assured.
                    if self.clause_db.at_capacity() {
                        self.counters.time += saturation_time.elapsed();

                        return Err(err::ErrorKind::ClauseDB(err::ClauseDBError::StorageExhausted));
                    }

                    log::info!(
                        target: targets::RESOLUTION,
                        "({left_canonical}) / ({right_canonical}) = ({resolvent})"
                    );

                    self.clause_db
                        .make_callback_resolvent(left_term, right_term, &resolvent);

                    let derived_empty = resolvent.is_empty_clause();
                    if derived_empty {
                        self.clause_db.make_callback_unsatisfiable(&resolvent);
                    }

                    match self.clause_db.store(resolvent, ClauseSource::Resolution)? {
                        ClauseOk::Added => self.counters.resolvents += 1,
                        ClauseOk::Duplicate => self.counters.duplicates += 1,
                    }

                    if derived_empty {
                        log::info!(target: targets::SATURATION, "The empty clause was derived");
                        self.state = ContextState::Unsatisfiable;

                        break 'scan;
                    }
                }
            }

            match self.state {
                // The merge at the top of the loop brings the empty clause across.
                ContextState::Unsatisfiable => continue 'rounds,

                _ => {
                    if self.clause_db.frontier_count() == 0 {
                        self.state = ContextState::Saturated;
                        break 'rounds;
                    }
                }
            }
        }

        self.counters.time += saturation_time.elapsed();
        log::info!(
            target: targets::SATURATION,
            "Concluded after {} round(s), with {} resolvent(s) from {} pair(s)",
            self.counters.rounds,
            self.counters.resolvents,
            self.counters.pairs
        );

        Ok(self.report())
    }
}

/// Saturates the given formula under a fresh context, returning whether a contradiction was
/// found together with the clause set at conclusion.
///
/// A convenience over [Context::saturate] for single-shot use.
///
/// ```rust
/// # use stoat_res::{config::Config, procedures::saturate, structures::term::Term};
/// let p = Term::literal("p");
/// let formula = vec![p.clone(), !p];
///
/// let (found, clauses) = saturate::refute(formula, Config::default())?;
///
/// assert!(found);
/// assert!(clauses.iter().any(Term::is_empty_clause));
/// # Ok::<(), stoat_res::types::err::ErrorKind>(())
/// ```
pub fn refute(formula: Vec<Term>, config: Config) -> Result<(bool, Vec<Term>), err::ErrorKind> {
    let mut the_context = Context::from_config(config);

    the_context.add_clauses(formula)?;
    the_context.saturate()?;

    let clauses = the_context.clause_db.clauses().cloned().collect();

    Ok((the_context.unsatisfiable(), clauses))
}
