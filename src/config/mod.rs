/*!
Configuration of a context.

Configuration is set at the creation of a context and fixed for the life of the context.

The interesting switches are those which choose how a resolvent is simplified, detailed with
[resolve](crate::procedures::resolution::resolve).
Of note: with the default configuration every complementary pair between two clauses is
eliminated in a single step.
Elimination of more than one pair at a time may derive the empty clause from a satisfiable
formula, and so is unsound, though as the distinguishing rule of the library it remains the
default.
For the classical, sound, rule pair [`multi_pair_elimination:
false`](Config::multi_pair_elimination) with [`discard_tautologies:
true`](Config::discard_tautologies).
*/

use serde::Serialize;

/// The configuration of a context.
#[derive(Clone, Debug, Serialize)]
pub struct Config {
    /// Whether resolution eliminates every complementary pair between two clauses, or exactly
    /// one pair.
    ///
    /// Eliminating exactly one pair is the classical rule.
    pub multi_pair_elimination: bool,

    /// Whether a resolvent containing a complementary pair is discarded as a tautology, or kept
    /// with the pair removed.
    ///
    /// Discarding tautologies is the classical treatment.
    pub discard_tautologies: bool,

    /// An upper limit on the count of clauses stored, original clauses and resolvents combined.
    ///
    /// Saturation fails with a [StorageExhausted](crate::types::err::ClauseDBError) error if the
    /// limit would be passed.
    pub clause_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            multi_pair_elimination: true,
            discard_tautologies: false,
            clause_limit: None,
        }
    }
}
