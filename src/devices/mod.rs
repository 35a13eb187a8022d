//! Physical component models of the microgrid hardware.

/// Stationary battery storage model.
pub mod battery;
/// DC/AC inverter with clipping and stochastic failures.
pub mod inverter;
/// Solar panel generation model.
pub mod solar;

// Re-export the main types for convenience
pub use battery::Battery;
pub use inverter::Inverter;
pub use solar::SolarPanel;
