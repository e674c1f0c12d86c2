//! Helpers to structure logging.

/// Targets for log messages.
pub mod targets {
    pub const BUILDER: &str = "builder";
    pub const CLAUSE_DB: &str = "clause_db";
    pub const RESOLUTION: &str = "resolution";
    pub const SATURATION: &str = "saturation";
}
