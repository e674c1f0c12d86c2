/*!
Reports from a context on the outcome of saturation.

A report is a high-level summary, derived from the [state](crate::context::ContextState) of a
context.
Details, if wanted, are read from the context itself.
*/

use serde::Serialize;

use crate::context::ContextState;

/// A report on the outcome of saturation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Report {
    /// The empty clause was derived, and so the formula is unsatisfiable.
    Unsatisfiable,

    /// The clause set is closed under resolution without derivation of the empty clause.
    Saturated,

    /// Saturation was interrupted before a fixed point was found.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(state: &ContextState) -> Self {
        match state {
            ContextState::Unsatisfiable => Report::Unsatisfiable,
            ContextState::Saturated => Report::Saturated,
            ContextState::Input | ContextState::Saturating => Report::Unknown,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Report::Unsatisfiable => write!(f, "Unsatisfiable"),
            Report::Saturated => write!(f, "Saturated"),
            Report::Unknown => write!(f, "Unknown"),
        }
    }
}
