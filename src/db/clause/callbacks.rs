//! Callbacks made on notable clauses.

use crate::{
    context::callbacks::{CallbackOnClause, CallbackOnResolvent},
    db::clause::ClauseDB,
    structures::term::Term,
};

impl ClauseDB {
    /// Sets a callback to be made when a fresh resolvent is stored, with the premises of the
    /// resolution passed through.
    pub fn set_callback_resolvent(&mut self, callback: Box<CallbackOnResolvent>) {
        self.callback_resolvent = Some(callback);
    }

    /// Sets a callback to be made when the empty clause is stored.
    pub fn set_callback_unsatisfiable(&mut self, callback: Box<CallbackOnClause>) {
        self.callback_unsatisfiable = Some(callback);
    }

    /// Makes the resolvent callback, if one is set.
    pub fn make_callback_resolvent(&mut self, left: &Term, right: &Term, resolvent: &Term) {
        if let Some(callback) = &mut self.callback_resolvent {
            callback(left, right, resolvent);
        }
    }

    /// Makes the unsatisfiability callback, if one is set.
    pub fn make_callback_unsatisfiable(&mut self, clause: &Term) {
        if let Some(callback) = &mut self.callback_unsatisfiable {
            callback(clause);
        }
    }
}
