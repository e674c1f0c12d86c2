/*!
Formulas in conjunctive normal form, taken as collections of clauses.

No dedicated structure is used.
Instead, any slice of terms is read as the conjunction of those terms, and the trait to hand
supplies the render of the conjunction.
*/

use crate::structures::term::{Term, CONJUNCTION};

pub trait Cnf {
    /// The formula as a string, each clause parenthesised and joined by `∧`.
    ///
    /// The conjunction of no clauses is rendered as the empty string.
    fn as_string(&self) -> String;
}

impl Cnf for [Term] {
    fn as_string(&self) -> String {
        let mut the_string = String::default();

        let mut clauses = self.iter();
        if let Some(first) = clauses.next() {
            the_string.push('(');
            the_string.push_str(&first.canonical());
            the_string.push(')');
        }
        for clause in clauses {
            the_string.push_str(CONJUNCTION);
            the_string.push('(');
            the_string.push_str(&clause.canonical());
            the_string.push(')');
        }

        the_string
    }
}

impl Cnf for Vec<Term> {
    fn as_string(&self) -> String {
        self.as_slice().as_string()
    }
}
