//! Procedures to saturate a context, and supporting functions.

pub mod resolution;
pub mod saturate;
