//! A trace of each derivation made during saturation, through the resolvent callback.
//!
//! To run: cargo run --example derivation_trace

use stoat_res::{config::Config, context::Context, structures::term::Term};

fn main() {
    let mut the_context = Context::from_config(Config::default());

    the_context
        .clause_db
        .set_callback_resolvent(Box::new(|left, right, resolvent| {
            println!("({left}) / ({right}) = ({resolvent})");
        }));

    the_context
        .clause_db
        .set_callback_unsatisfiable(Box::new(|clause| {
            println!("Derived: {clause}");
        }));

    // p, with p → q, q → r, and ¬(r), an unsatisfiable chain.
    let formula = vec![
        Term::literal("p"),
        !Term::literal("p") | Term::literal("q"),
        !Term::literal("q") | Term::literal("r"),
        !Term::literal("r"),
    ];
    the_context
        .add_clauses(formula)
        .expect("no clause limit is set");

    let report = the_context.saturate().expect("no clause limit is set");
    println!("The report: {report}");
}
