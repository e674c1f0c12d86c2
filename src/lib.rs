/*!
A library for establishing the unsatisfiability of propositional formulas written in
conjunctive normal form, by saturation of the formula under resolution.

# Overview

Use of the library goes through a [context](crate::context), to which the clauses of a formula
are added, and which is then [saturated](crate::context::Context::saturate) under
[resolution](crate::procedures::resolution).

Saturation concludes either with the derivation of the *empty clause*, witnessing the
unsatisfiability of the formula, or with a clause set closed under the resolution rule applied,
witnessing that no such derivation exists.

Points of note:

- Clauses are [terms](crate::structures::term), built by hand or with the `!` and `|`
  operators, and identified by a canonical string form.
- The rule applied is fixed by the [configuration](crate::config) of the context, and with the
  default configuration is *not* the classical rule, as every complementary pair between two
  clauses is eliminated in a single step.
- Derivations may be observed through [callbacks](crate::context::callbacks), and inspected
  afterwards through the [clause database](crate::db::clause) and
  [counters](crate::context::counters).
- As each round of saturation examines each pair of stored clauses, expect time quadratic in
  the size of the clause set per round, and a clause set exponential in the size of the formula
  in the worst case.

# Example

```rust
use stoat_res::{config::Config, context::Context, reports::Report, structures::term::Term};

let mut the_context = Context::from_config(Config::default());

let clauses = vec![
    Term::literal("p") | Term::literal("q"),
    !Term::literal("p") | Term::literal("q"),
    Term::literal("p") | !Term::literal("q"),
    !Term::literal("p") | !Term::literal("q"),
];
the_context.add_clauses(clauses).expect("within clause limits");

let report = the_context.saturate().expect("within clause limits");
assert_eq!(report, Report::Unsatisfiable);
```

# Logging

Logs are made through the [log](https://crates.io/crates/log) facade, with
[targets](crate::misc::log::targets) to pick out derivations, the clause database, and the
round structure.
The library attaches no logger, so by default the logs go nowhere.
*/

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
