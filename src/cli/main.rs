//! A command line interface to the library, over a handful of bundled problems.
//!
//! Output follows the SAT solver convention of `c` comment lines and a final `s` conclusion
//! line, with exit code 20 on an unsatisfiable conclusion and 10 on saturation.

use clap::{Parser, ValueEnum};
use serde::Serialize;

use stoat_res::{
    config::Config,
    context::{counters::Counters, Context},
    reports::Report,
    structures::{cnf::Cnf, term::Term},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// The bundled problem to saturate.
    #[arg(default_value_t, value_enum)]
    problem: Problem,

    /// Eliminate exactly one complementary pair per resolution step.
    ///
    /// The default eliminates every pair found, which may conclude unsatisfiable on a
    /// satisfiable formula.
    #[arg(long)]
    single_pair: bool,

    /// Discard tautological resolvents, in place of keeping them with the internal
    /// complementary pairs removed.
    #[arg(long)]
    discard_tautologies: bool,

    /// Abandon saturation if the clause set would grow past the given count.
    #[arg(long, value_name = "COUNT")]
    clause_limit: Option<usize>,

    /// Print each derivation as it is made.
    #[arg(short, long)]
    steps: bool,

    /// Print a JSON summary of the attempt in place of the usual comment lines.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
enum Problem {
    #[default]
    /// Four clauses over two names which together admit no valuation.
    Contradiction,

    /// A chain of implications with contradictory ends.
    Chain,

    /// A satisfiable triple, on which the default rule nonetheless concludes unsatisfiable.
    Triangle,

    /// Two clauses with no complementary literals.
    Agreeable,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Contradiction => write!(f, "contradiction"),
            Self::Chain => write!(f, "chain"),
            Self::Triangle => write!(f, "triangle"),
            Self::Agreeable => write!(f, "agreeable"),
        }
    }
}

fn formula(problem: Problem) -> Vec<Term> {
    let p = || Term::literal("p");
    let q = || Term::literal("q");
    let r = || Term::literal("r");

    match problem {
        Problem::Contradiction => vec![p() | q(), !p() | q(), p() | !q(), !p() | !q()],
        Problem::Chain => vec![p(), !p() | q(), !q() | r(), !r()],
        Problem::Triangle => vec![p() | q(), !p() | r(), !q() | !r()],
        Problem::Agreeable => vec![p(), q() | r()],
    }
}

#[derive(Serialize)]
struct Summary<'c> {
    problem: Problem,
    report: Report,
    found: bool,
    clauses: Vec<String>,
    counters: &'c Counters,
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args = Args::parse();

    let config = Config {
        multi_pair_elimination: !args.single_pair,
        discard_tautologies: args.discard_tautologies,
        clause_limit: args.clause_limit,
    };

    let mut the_context = Context::from_config(config);

    if args.steps {
        the_context
            .clause_db
            .set_callback_resolvent(Box::new(|left, right, resolvent| {
                println!("c ({left}) / ({right}) = ({resolvent})");
            }));
    }

    let the_formula = formula(args.problem);
    println!("c Problem: {}", args.problem);
    println!("c Formula: {}", the_formula.as_string());

    for clause in the_formula {
        if let Err(err) = the_context.add_clause(clause) {
            println!("c Error: {err:?}");
            std::process::exit(1);
        }
    }

    let report = match the_context.saturate() {
        Ok(report) => report,

        Err(err) => {
            println!("c Error: {err:?}");
            std::process::exit(1);
        }
    };

    match args.json {
        true => {
            let summary = Summary {
                problem: args.problem,
                report,
                found: the_context.unsatisfiable(),
                clauses: the_context
                    .clause_db
                    .canonical_forms()
                    .map(String::from)
                    .collect(),
                counters: &the_context.counters,
            };

            println!(
                "{}",
                serde_json::to_string_pretty(&summary).expect("Serialization failure")
            );
        }

        false => {
            println!("c Clauses at conclusion:");
            for canonical in the_context.clause_db.canonical_forms() {
                println!("c   {canonical}");
            }

            let counters = &the_context.counters;
            println!(
                "c Rounds: {}, pairs: {}, resolvents: {}, duplicates: {}, tautologies: {}",
                counters.rounds,
                counters.pairs,
                counters.resolvents,
                counters.duplicates,
                counters.tautologies
            );
            println!("c Time: {:?}", counters.time);
        }
    }

    match report {
        Report::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            std::process::exit(20);
        }

        Report::Saturated => {
            println!("s SATURATED");
            std::process::exit(10);
        }

        Report::Unknown => println!("s UNKNOWN"),
    }
}
