/// Minute-resolution simulation clock.
pub mod clock;
pub mod engine;
/// Energy dispatch strategies.
pub mod strategy;
/// Post-hoc run summary.
pub mod summary;
pub mod types;
