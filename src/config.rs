//! TOML-based scenario configuration.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level scenario configuration parsed from TOML.
///
/// Only `simulation.duration_days` is required; every other key has a
/// default. Load from TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default scenario.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Simulation horizon, step size, season, and seed.
    pub simulation: SimulationSection,
    /// Battery storage parameters.
    #[serde(default)]
    pub battery: BatterySection,
    /// Solar panel and inverter parameters.
    #[serde(default)]
    pub solar: SolarSection,
    /// Household load parameters.
    #[serde(default)]
    pub load: LoadSection,
    /// Grid pricing and export limit.
    #[serde(default)]
    pub grid: GridSection,
    /// Dispatch strategy selection.
    #[serde(default)]
    pub strategy: StrategySection,
}

/// Simulation horizon and global parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSection {
    /// Number of days to simulate (required, must be > 0).
    pub duration_days: u32,
    /// Step size in minutes.
    #[serde(default = "default_step_minutes")]
    pub time_step_minutes: u32,
    /// Season name weighting the weather model; unrecognized names fall
    /// back to uniform cloud-band weights.
    #[serde(default = "default_season")]
    pub season: String,
    /// Master random seed.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_step_minutes() -> u32 {
    60
}

fn default_season() -> String {
    "Summer".to_string()
}

fn default_seed() -> u64 {
    42
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            duration_days: 1,
            time_step_minutes: default_step_minutes(),
            season: default_season(),
            seed: default_seed(),
        }
    }
}

/// Battery storage parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatterySection {
    /// Capacity in kWh.
    pub capacity: f32,
    /// Round-trip efficiency (0.0 to 1.0).
    pub efficiency: f32,
    /// Minimum state-of-charge fraction (discharge-depth floor).
    pub discharge_depth: f32,
    /// Initial state of charge as a fraction (0.0 to 1.0).
    pub initial_state: f32,
}

impl Default for BatterySection {
    fn default() -> Self {
        Self {
            capacity: 13.5,
            efficiency: 0.90,
            discharge_depth: 0.05,
            initial_state: 0.0,
        }
    }
}

/// Solar panel and inverter parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolarSection {
    /// Panel peak generation (kW).
    pub panel_peak_kw: f32,
    /// Inverter clipping limit (kW).
    pub inverter_max_kw: f32,
    /// Inverter failure probability per step.
    pub inverter_failure_rate: f32,
    /// Shortest repair duration (hours).
    pub failure_duration_min_hours: u32,
    /// Longest repair duration (hours).
    pub failure_duration_max_hours: u32,
}

impl Default for SolarSection {
    fn default() -> Self {
        Self {
            panel_peak_kw: 5.0,
            inverter_max_kw: 4.0,
            inverter_failure_rate: 0.005,
            failure_duration_min_hours: 4,
            failure_duration_max_hours: 72,
        }
    }
}

/// Household load parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadSection {
    /// Always-on baseline consumption (kW).
    pub base_load_kw: f32,
    /// Maximum spike magnitude during peak hours (kW).
    pub peak_load_kw: f32,
    /// Peak window start, hour of day (inclusive).
    pub peak_start_hour: f32,
    /// Peak window end, hour of day (inclusive).
    pub peak_end_hour: f32,
}

impl Default for LoadSection {
    fn default() -> Self {
        Self {
            base_load_kw: 0.5,
            peak_load_kw: 3.0,
            peak_start_hour: 18.0,
            peak_end_hour: 21.0,
        }
    }
}

/// Grid pricing and export limit.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSection {
    /// Maximum export power (kW).
    pub export_limit_kw: f32,
    /// Price per kWh imported.
    pub cost_import_cents: f32,
    /// Price per kWh exported.
    pub price_export_cents: f32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            export_limit_kw: 20.0,
            cost_import_cents: 0.75,
            price_export_cents: 0.90,
        }
    }
}

/// Dispatch strategy selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrategySection {
    /// Strategy name; unrecognized names fall back to `LOAD_PRIORITY`.
    pub name: String,
}

impl Default for StrategySection {
    fn default() -> Self {
        Self {
            name: "LOAD_PRIORITY".to_string(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"simulation.duration_days"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: a one-day hourly summer run with the
    /// default hardware parameters.
    pub fn baseline() -> Self {
        Self {
            simulation: SimulationSection::default(),
            battery: BatterySection::default(),
            solar: SolarSection::default(),
            load: LoadSection::default(),
            grid: GridSection::default(),
            strategy: StrategySection::default(),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid, contains unknown
    /// fields, or omits the required `simulation.duration_days`.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid. Season and
    /// strategy names are not validated here: unrecognized values fall
    /// back to defined behavior instead of failing the run.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.simulation;

        if s.duration_days == 0 {
            errors.push(ConfigError {
                field: "simulation.duration_days".into(),
                message: "must be > 0".into(),
            });
        }
        if s.time_step_minutes == 0 {
            errors.push(ConfigError {
                field: "simulation.time_step_minutes".into(),
                message: "must be > 0".into(),
            });
        }

        let b = &self.battery;
        if b.capacity <= 0.0 {
            errors.push(ConfigError {
                field: "battery.capacity".into(),
                message: "must be > 0".into(),
            });
        }
        if !(b.efficiency > 0.0 && b.efficiency <= 1.0) {
            errors.push(ConfigError {
                field: "battery.efficiency".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }
        if !(0.0..=1.0).contains(&b.discharge_depth) {
            errors.push(ConfigError {
                field: "battery.discharge_depth".into(),
                message: "must be in [0.0, 1.0]".into(),
            });
        }
        if !(0.0..=1.0).contains(&b.initial_state) {
            errors.push(ConfigError {
                field: "battery.initial_state".into(),
                message: "must be in [0.0, 1.0]".into(),
            });
        }

        let sol = &self.solar;
        if sol.panel_peak_kw < 0.0 {
            errors.push(ConfigError {
                field: "solar.panel_peak_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if sol.inverter_max_kw < 0.0 {
            errors.push(ConfigError {
                field: "solar.inverter_max_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if !(0.0..=1.0).contains(&sol.inverter_failure_rate) {
            errors.push(ConfigError {
                field: "solar.inverter_failure_rate".into(),
                message: "must be in [0.0, 1.0]".into(),
            });
        }
        if sol.failure_duration_min_hours > sol.failure_duration_max_hours {
            errors.push(ConfigError {
                field: "solar.failure_duration_min_hours".into(),
                message: "must be <= solar.failure_duration_max_hours".into(),
            });
        }

        let l = &self.load;
        if l.base_load_kw < 0.0 {
            errors.push(ConfigError {
                field: "load.base_load_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if l.peak_load_kw < 0.0 {
            errors.push(ConfigError {
                field: "load.peak_load_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if l.peak_start_hour > l.peak_end_hour {
            errors.push(ConfigError {
                field: "load.peak_start_hour".into(),
                message: "must be <= load.peak_end_hour".into(),
            });
        }

        if self.grid.export_limit_kw < 0.0 {
            errors.push(ConfigError {
                field: "grid.export_limit_kw".into(),
                message: "must be >= 0".into(),
            });
        }

        errors
    }
}
