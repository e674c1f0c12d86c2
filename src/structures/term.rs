/*!
Terms of a propositional formula, with clauses as disjunctive groupings of literals.

A term is either a [literal](crate::structures::literal::Literal) or a grouping of sub-terms
joined by disjunction, with negation applicable to either.
Clauses, then, are groupings, and a formula in conjunctive normal form is some collection of
clauses.

# Canonical form

Every term has a canonical form, obtained by rendering the term as a string:

- A literal is rendered as its name, wrapped as `¬(name)` if negated.
- A grouping is rendered as the render of its sub-terms joined by `∨`, wrapped as `¬(…)` if
  negated.
- The grouping of no sub-terms is rendered as `⊥`.

Equality and hashing of terms go through the canonical form, and two terms are the same term
just in case they render to the same string.
In particular, a grouping of a single literal and the literal itself are the same term, and a
grouping is transparent to nesting of (un-negated) groupings.

The canonical form is recomputed on demand.
Stored clauses have their canonical form cached by the
[clause database](crate::db::clause::ClauseDB), so the cost of rendering is kept away from
lookup of stored clauses.

# The empty clause

The grouping of no sub-terms is the *empty clause*, the witness of a contradiction, built with
[empty_clause](Term::empty_clause) and rendered as `⊥`.
As equality goes through the render, the name `⊥` is reserved, in the sense that a literal named
`⊥` would be indistinguishable from the empty clause.

[clause](Term::clause) rejects an empty collection of sub-terms, so the empty clause is never
confused with the absence of a grouping.

# Example

```rust
# use stoat_res::structures::term::Term;
let p = Term::literal("p");
let q = Term::literal("q");

let clause = p.clone() | !q.clone();
assert_eq!(clause.to_string(), "p∨¬(q)");

let same = Term::clause(vec![p, q.negate()]).expect("non-empty");
assert_eq!(clause, same);

assert_eq!(Term::empty_clause().to_string(), "⊥");
```
*/

use std::hash::{Hash, Hasher};

use crate::{structures::literal::Literal, types::err};

/// The render of the empty clause.
pub const EMPTY_CLAUSE_NAME: &str = "⊥";

/// The connective used when rendering a disjunctive grouping.
pub const DISJUNCTION: &str = "∨";

/// The connective used when rendering a formula in conjunctive normal form.
pub const CONJUNCTION: &str = "∧";

/// A term of a propositional formula.
///
/// Terms are immutable, and the operations to hand return fresh terms.
#[derive(Clone, Debug)]
pub struct Term {
    shape: Shape,
}

/// The shape of a term, a literal or a grouping of sub-terms.
#[derive(Clone, Debug)]
enum Shape {
    /// A literal.
    Literal(Literal),

    /// A grouping of sub-terms joined by disjunction, to which negation may have been applied.
    Group { subterms: Vec<Term>, negated: bool },
}

impl Term {
    /// A term of a single un-negated literal with the given name.
    pub fn literal(name: impl Into<String>) -> Self {
        Term {
            shape: Shape::Literal(Literal::new(name, false)),
        }
    }

    /// A clause over the given sub-terms.
    ///
    /// An empty collection of sub-terms is rejected, as the empty clause is a distinguished
    /// term built with [empty_clause](Term::empty_clause).
    pub fn clause(subterms: Vec<Term>) -> Result<Self, err::ErrorKind> {
        match subterms.is_empty() {
            true => Err(err::ErrorKind::Term(err::TermError::EmptyGrouping)),
            false => Ok(Term {
                shape: Shape::Group {
                    subterms,
                    negated: false,
                },
            }),
        }
    }

    /// The empty clause, a grouping of no sub-terms, rendered as `⊥`.
    pub fn empty_clause() -> Self {
        Term {
            shape: Shape::Group {
                subterms: Vec::default(),
                negated: false,
            },
        }
    }

    /// A clause over the given literals, with the empty clause for an empty collection.
    pub(crate) fn from_literals(literals: Vec<Literal>) -> Self {
        Term {
            shape: Shape::Group {
                subterms: literals.into_iter().map(Term::from).collect(),
                negated: false,
            },
        }
    }

    /// A fresh term, the term to hand with negation flipped.
    pub fn negate(&self) -> Self {
        !self.clone()
    }

    /// A fresh grouping of the term to hand with `other`, in that order.
    pub fn or(self, other: Term) -> Self {
        Term {
            shape: Shape::Group {
                subterms: vec![self, other],
                negated: false,
            },
        }
    }

    /// The literals of the term, in order of occurrence, duplicates included.
    ///
    /// Negation applied to a grouping is not distributed over the grouping, as clauses are
    /// expected in negation normal form.
    /// The empty clause flattens to no literals.
    pub fn literals(&self) -> Vec<Literal> {
        let mut literals = Vec::default();
        self.collect_literals(&mut literals);
        literals
    }

    fn collect_literals(&self, literals: &mut Vec<Literal>) {
        match &self.shape {
            Shape::Literal(literal) => literals.push(literal.clone()),

            Shape::Group { subterms, .. } => {
                for subterm in subterms {
                    subterm.collect_literals(literals);
                }
            }
        }
    }

    /// The canonical form of the term.
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// Whether the term is the empty clause.
    pub fn is_empty_clause(&self) -> bool {
        match &self.shape {
            Shape::Literal(_) => false,
            Shape::Group { subterms, negated } => subterms.is_empty() && !negated,
        }
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term {
            shape: Shape::Literal(literal),
        }
    }
}

impl std::ops::Not for Term {
    type Output = Term;

    fn not(self) -> Self::Output {
        match self.shape {
            Shape::Literal(literal) => Term {
                shape: Shape::Literal(!literal),
            },

            Shape::Group { subterms, negated } => Term {
                shape: Shape::Group {
                    subterms,
                    negated: !negated,
                },
            },
        }
    }
}

impl std::ops::BitOr for Term {
    type Output = Term;

    fn bitor(self, rhs: Term) -> Self::Output {
        self.or(rhs)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.shape {
            Shape::Literal(literal) => write!(f, "{literal}"),

            Shape::Group { subterms, negated } => {
                if *negated {
                    write!(f, "¬(")?;
                }

                match subterms.split_first() {
                    None => write!(f, "{EMPTY_CLAUSE_NAME}")?,

                    Some((first, rest)) => {
                        write!(f, "{first}")?;
                        for subterm in rest {
                            write!(f, "{DISJUNCTION}{subterm}")?;
                        }
                    }
                }

                match negated {
                    true => write!(f, ")"),
                    false => Ok(()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negated_groupings_are_wrapped() {
        let clause = Term::literal("a") | Term::literal("b");

        assert_eq!(clause.negate().to_string(), "¬(a∨b)");
        assert_eq!(clause.negate().negate(), clause);
    }

    #[test]
    fn the_negated_empty_clause_is_not_the_empty_clause() {
        let negated = Term::empty_clause().negate();

        assert_eq!(negated.to_string(), "¬(⊥)");
        assert!(!negated.is_empty_clause());
        assert!(negated.negate().is_empty_clause());
    }
}
