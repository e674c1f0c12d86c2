/*!
Resolution over a pair of clauses.

Given two clauses which contain a complementary pair of literals, one literal from each clause,
resolution derives the clause over the remaining literals of both.
For example, p ∨ q and ¬(p) ∨ r resolve to q ∨ r, eliminating the pair p, ¬(p).

Two points of [configuration](crate::config::Config) fix the exact rule applied:

- `multi_pair_elimination` holds whether *every* complementary pair between the clauses is
  eliminated in the one step, or exactly one pair.
  With every pair, p ∨ q and ¬(p) ∨ ¬(q) resolve to the empty clause, while with exactly one
  pair the literals of the second pair remain in the resolvent.
- `discard_tautologies` holds the treatment of a resolvent which itself contains a
  complementary pair, 'complementary' read within the one clause.
  Such a resolvent is true on any valuation, and may be discarded with nothing stored, or kept
  with the internal pair (or pairs, as above) removed.

In each case the literals of the resolvent keep their order of occurrence, literals of the left
premise and then literals of the right premise, with later duplicates dropped.
A resolvent with no literals is the [empty clause](crate::structures::term::Term::empty_clause).

# Example

```rust
# use stoat_res::{config::Config, procedures::resolution::{self, Resolution}, structures::term::Term};
let config = Config::default();

let left = Term::literal("p") | Term::literal("q");
let right = !Term::literal("p") | Term::literal("r");

match resolution::resolve(&left, &right, &config) {
    Resolution::Resolvent(resolvent) => assert_eq!(resolvent.to_string(), "q∨r"),
    _ => panic!("a complementary pair is present"),
}
```
*/

use indexmap::IndexSet;

use crate::{
    config::Config,
    structures::{literal::Literal, term::Term},
};

/// The outcome of an attempt to resolve two clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The resolvent of the two clauses.
    Resolvent(Term),

    /// The resolvent contains a complementary pair and tautologies are discarded.
    Tautology,

    /// The clauses contain no complementary pair, and so no resolvent exists.
    NoPair,
}

/// Attempts to resolve `left` against `right`.
///
/// No restriction is placed on the pair.
/// In particular, two copies of one clause resolve as any other pair, with complementary
/// literals read across the copies, so p ∨ ¬(p) against its own copy resolves to the empty
/// clause.
/// Saturation never examines such a pairing, as a clause is not paired against itself and the
/// clause database keeps a single copy of each clause.
pub fn resolve(left: &Term, right: &Term, config: &Config) -> Resolution {
    let left_literals = left.literals();
    let right_literals = right.literals();

    let (left_marks, right_marks) = match complementary_marks(
        &left_literals,
        &right_literals,
        config.multi_pair_elimination,
    ) {
        Some(marks) => marks,
        None => return Resolution::NoPair,
    };

    // The union of unmarked literals, left premise then right, first occurrence kept.
    let mut survivors: IndexSet<Literal> = IndexSet::default();
    for (index, literal) in left_literals.into_iter().enumerate() {
        if !left_marks[index] {
            survivors.insert(literal);
        }
    }
    for (index, literal) in right_literals.into_iter().enumerate() {
        if !right_marks[index] {
            survivors.insert(literal);
        }
    }

    if survivors.is_empty() {
        return Resolution::Resolvent(Term::empty_clause());
    }

    let mut survivors: Vec<Literal> = survivors.into_iter().collect();

    match config.discard_tautologies {
        true => {
            if contains_complementary_pair(&survivors) {
                return Resolution::Tautology;
            }
        }

        false => strip_complementary_pairs(&mut survivors, config.multi_pair_elimination),
    }

    Resolution::Resolvent(Term::from_literals(survivors))
}

/// Marks of the complementary pairs between `left` and `right`, or None if there are none.
///
/// With `every_pair` each pairing of a left against a right literal is examined, and otherwise
/// the scan stops at the first complementary pair found.
fn complementary_marks(
    left: &[Literal],
    right: &[Literal],
    every_pair: bool,
) -> Option<(Vec<bool>, Vec<bool>)> {
    let mut left_marks = vec![false; left.len()];
    let mut right_marks = vec![false; right.len()];
    let mut found = false;

    'left_scan: for (left_index, left_literal) in left.iter().enumerate() {
        for (right_index, right_literal) in right.iter().enumerate() {
            if left_literal.complements(right_literal) {
                left_marks[left_index] = true;
                right_marks[right_index] = true;
                found = true;

                if !every_pair {
                    break 'left_scan;
                }
            }
        }
    }

    match found {
        true => Some((left_marks, right_marks)),
        false => None,
    }
}

/// Whether the literals contain a complementary pair.
fn contains_complementary_pair(literals: &[Literal]) -> bool {
    for (index, literal) in literals.iter().enumerate() {
        for other in &literals[index + 1..] {
            if literal.complements(other) {
                return true;
            }
        }
    }

    false
}

/// Removes complementary pairs found within the literals, every pair or exactly one by
/// `every_pair`, as when marking pairs across premises.
fn strip_complementary_pairs(literals: &mut Vec<Literal>, every_pair: bool) {
    let mut marks = vec![false; literals.len()];
    let mut found = false;

    'scan: for first in 0..literals.len() {
        for second in (first + 1)..literals.len() {
            if literals[first].complements(&literals[second]) {
                marks[first] = true;
                marks[second] = true;
                found = true;

                if !every_pair {
                    break 'scan;
                }
            }
        }
    }

    if found {
        let mut index = 0;
        literals.retain(|_| {
            let keep = !marks[index];
            index += 1;
            keep
        });
    }
}
