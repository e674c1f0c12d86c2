//! Structures used to represent formulas.

pub mod cnf;
pub mod literal;
pub mod term;
