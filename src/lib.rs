//! Residential solar+battery+grid microgrid simulator.

/// TOML scenario configuration and validation.
pub mod config;
pub mod devices;
/// Stochastic environment models: weather, household load, utility grid.
pub mod environment;
pub mod io;
/// Simulation engine, clock, dispatch strategies, and summary reporting.
pub mod sim;
