//! Direct construction of a formula, a saturation attempt, and a look at the conclusion.
//!
//! To run: cargo run --example direct_construction

use stoat_res::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    reports::Report,
    structures::{cnf::Cnf, term::Term},
};

fn main() {
    let config = Config::default();
    let mut the_context = Context::from_config(config);

    // Four clauses over two names, together admitting no valuation.
    let formula = vec![
        Term::literal("p") | Term::literal("q"),
        !Term::literal("p") | Term::literal("q"),
        Term::literal("p") | !Term::literal("q"),
        !Term::literal("p") | !Term::literal("q"),
    ];
    println!("The formula: {}", formula.as_string());

    for clause in formula {
        let result = the_context.add_clause(clause);
        assert_eq!(result, Ok(ClauseOk::Added));
    }

    let report = the_context.saturate().expect("no clause limit is set");
    assert_eq!(report, Report::Unsatisfiable);
    println!("The report: {report}");

    println!("The clause set at conclusion:");
    for db_clause in the_context.clause_db.db_clauses() {
        println!("  {} ({:?})", db_clause.term(), db_clause.source());
    }

    println!(
        "{} resolvent(s) from {} pair(s) over {} round(s)",
        the_context.counters.resolvents, the_context.counters.pairs, the_context.counters.rounds
    );
}
