/*!
Tools to place a formula in a context.

Formulas are added clause by clause, with each clause an (un-negated) term.

Each clause is taken to denote a disjunction of literals.
No check of form is made, and what saturation concludes from a term of some other shape is
unspecified, so the form of a formula is the responsibility of the caller.

Duplicate clauses are detected by canonical form and dropped, so a formula may be added without
concern for repetition.

# Example

```rust
# use stoat_res::{builder::ClauseOk, config::Config, context::Context, structures::term::Term};
let mut the_context = Context::from_config(Config::default());

let clause = Term::literal("p") | Term::literal("q");
assert_eq!(the_context.add_clause(clause.clone()), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause(clause), Ok(ClauseOk::Duplicate));
```
*/

use crate::{
    context::{Context, ContextState},
    db::clause::ClauseSource,
    misc::log::targets,
    structures::term::Term,
    types::err,
};

/// Fine ways adding a clause may go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored.
    Added,

    /// A clause with the same canonical form was already stored, and the clause was dropped.
    Duplicate,
}

impl Context {
    /// Adds a clause to the context.
    ///
    /// Adding a clause to a saturated context returns the context to input, and a further call
    /// to [saturate](Context::saturate) extends the established clause set with consequences of
    /// the fresh clause.
    ///
    /// Adding a clause to an unsatisfiable context is permitted, though of no consequence, as
    /// the empty clause remains in the clause set.
    ///
    /// Returns an error if storing the clause would pass the configured clause limit.
    pub fn add_clause(&mut self, clause: Term) -> Result<ClauseOk, err::ErrorKind> {
        if let ContextState::Saturated = self.state {
            log::info!(target: targets::BUILDER, "Saturated context returned to input");
            self.state = ContextState::Input;
        }

        self.clause_db.store(clause, ClauseSource::Original)
    }

    /// Adds each clause of a formula to the context, in the order given.
    pub fn add_clauses(
        &mut self,
        clauses: impl IntoIterator<Item = Term>,
    ) -> Result<(), err::ErrorKind> {
        for clause in clauses {
            self.add_clause(clause)?;
        }

        Ok(())
    }
}
