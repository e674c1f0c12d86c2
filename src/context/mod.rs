/*!
A context, loosely a collection of all the things relevant to an attempt to refute a formula.

In particular, a context holds:

- A [configuration](crate::config), fixed when the context is created.
- A [clause database](crate::db::clause), holding the formula together with every clause derived
  from it.
- [Counters](crate::context::counters), detailing the work done.
- The [state](ContextState) of the procedure, from which a [report](crate::reports) is derived.

Clauses are added to a context with the methods of the [builder](crate::builder), and the
context is saturated with [saturate](Context::saturate).

# Example

```rust
# use stoat_res::{config::Config, context::Context, reports::Report, structures::term::Term};
let mut the_context = Context::from_config(Config::default());

let p = Term::literal("p");
the_context.add_clause(p.clone()).expect("within clause limits");
the_context.add_clause(!p).expect("within clause limits");

let report = the_context.saturate().expect("within clause limits");
assert_eq!(report, Report::Unsatisfiable);
```
*/

use crate::{
    config::Config, context::callbacks::CallbackTerminate, context::counters::Counters,
    db::clause::ClauseDB, reports::Report,
};

pub mod callbacks;
pub mod counters;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Clauses are being collected and no saturation attempt has been made, or a clause has
    /// been added since an attempt concluded.
    Input,

    /// Saturation is underway, or was interrupted before concluding.
    Saturating,

    /// The working set is closed under resolution, and the empty clause was not derived.
    Saturated,

    /// The empty clause was derived.
    Unsatisfiable,
}

/// A context for refutation by saturation.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters over the life of the context.
    pub counters: Counters,

    /// The clause database of the context.
    pub clause_db: ClauseDB,

    /// The state of the context.
    pub state: ContextState,

    /// A callback made between saturation rounds, interrupting saturation on true.
    callback_terminate: Option<Box<CallbackTerminate>>,
}

impl Context {
    /// A fresh context, set up on the given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            clause_db: ClauseDB::new(&config),
            counters: Counters::default(),
            state: ContextState::Input,
            callback_terminate: None,
            config,
        }
    }

    /// A report on the present state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// Whether the empty clause has been derived.
    pub fn unsatisfiable(&self) -> bool {
        matches!(self.state, ContextState::Unsatisfiable)
    }
}
