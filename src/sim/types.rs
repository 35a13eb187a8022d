//! Core simulation types: configuration and per-step records.

use std::fmt;

use super::clock::MINUTES_PER_DAY;

/// Centralized simulation timing parameters.
///
/// The engine and the entry point reference this struct for the horizon,
/// the step size, and the master random seed.
///
/// # Examples
///
/// ```
/// use microgrid_sim::sim::types::SimConfig;
///
/// let cfg = SimConfig::new(1, 60, 42);
/// assert_eq!(cfg.total_minutes(), 1440);
/// assert_eq!(cfg.total_steps(), 24);
/// ```
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of days to simulate.
    pub duration_days: u32,
    /// Step size in minutes.
    pub step_minutes: u32,
    /// Master random seed for reproducibility.
    pub seed: u64,
}

impl SimConfig {
    /// Creates a new simulation configuration.
    ///
    /// # Panics
    ///
    /// Panics if `duration_days` or `step_minutes` is zero.
    pub fn new(duration_days: u32, step_minutes: u32, seed: u64) -> Self {
        assert!(duration_days > 0, "duration_days must be > 0");
        assert!(step_minutes > 0, "step_minutes must be > 0");
        Self {
            duration_days,
            step_minutes,
            seed,
        }
    }

    /// Total simulated horizon in minutes.
    pub fn total_minutes(&self) -> u32 {
        self.duration_days * MINUTES_PER_DAY
    }

    /// Total number of simulation steps across the horizon.
    ///
    /// A final partial step is still executed when the step size does not
    /// divide the horizon evenly.
    pub fn total_steps(&self) -> u32 {
        self.total_minutes().div_ceil(self.step_minutes)
    }
}

/// Complete record of one simulation step.
///
/// Records form an append-only sequence ordered by time, one per step;
/// a record is never mutated after the step that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    /// Simulated time in minutes since start.
    pub time_min: u32,
    /// Day index (0-based).
    pub day: u32,
    /// Fractional hour of day (0.0 to 24.0).
    pub hour: f32,
    /// AC solar generation after inverter clipping (kW).
    pub solar_gen_kw: f32,
    /// Household demand (kW).
    pub load_kw: f32,
    /// Battery stored energy after dispatch (kWh).
    pub battery_soc_kwh: f32,
    /// Energy imported from the grid this step (kW).
    pub grid_import_kw: f32,
    /// Energy exported to the grid this step (kW).
    pub grid_export_kw: f32,
    /// Net cost of this step's grid exchange (positive = payment).
    pub cost: f32,
    /// Cloud coverage fraction sampled this step (0.0 to 1.0).
    pub cloud_cover: f32,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "d{:<2} {:>5.2}h | solar={:>5.2} kW  load={:>5.2} kW  soc={:>6.2} kWh | \
             import={:>5.2}  export={:>5.2}  cost={:>6.3} | cloud={:.2}",
            self.day,
            self.hour,
            self.solar_gen_kw,
            self.load_kw,
            self.battery_soc_kwh,
            self.grid_import_kw,
            self.grid_export_kw,
            self.cost,
            self.cloud_cover,
        )
    }
}
