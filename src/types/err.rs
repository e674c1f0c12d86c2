//! Error types used in the library.
//!
//! The algorithm itself is a pure computation over well-formed input, and so errors are limited to
//! precondition violations and resource exhaustion.
//! Names of the error enums overlap with corresponding structs, and so throughout the library
//! `err::{self}` is used to prefix use of the types with `err::`.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Term(TermError),
    ClauseDB(ClauseDBError),
}

/// Noted errors when constructing terms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TermError {
    /// A request was made to build a grouping from no sub-terms.
    EmptyGrouping,
}

impl From<TermError> for ErrorKind {
    fn from(e: TermError) -> Self {
        ErrorKind::Term(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// The clause limit was met, and a request was made to store a further (novel) clause.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}
