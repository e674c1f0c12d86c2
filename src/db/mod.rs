//! Databases of things used during saturation.

pub mod clause;
