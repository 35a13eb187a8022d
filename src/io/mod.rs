//! Result persistence.

/// CSV export for simulation step records.
pub mod export;
