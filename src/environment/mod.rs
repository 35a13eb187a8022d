//! Environment models: weather, household demand, and the utility grid.

/// Utility grid pricing and export limits.
pub mod grid;
/// Stochastic household load model.
pub mod load;
/// Season-weighted cloud coverage model.
pub mod weather;

// Re-export the main types for convenience
pub use grid::UtilityGrid;
pub use load::HomeLoad;
pub use weather::{Season, Weather};
