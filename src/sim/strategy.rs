//! Energy dispatch strategies allocating power among load, battery, and grid.

use crate::devices::Battery;

/// Where one step's energy went, as decided by the dispatch strategy.
///
/// All flows are non-negative per-step kW magnitudes. Solar-side flows
/// plus curtailment never exceed the step's solar generation, and
/// `solar_to_load + battery_discharge + grid_import` always equals the
/// load demand (grid import is unconstrained).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyFlow {
    /// Solar generation serving the household load directly.
    pub solar_to_load: f32,
    /// Solar generation consumed charging the battery.
    pub solar_to_battery: f32,
    /// Solar generation exported to the grid.
    pub solar_to_grid: f32,
    /// Energy imported from the grid.
    pub grid_import: f32,
    /// Energy delivered by the battery.
    pub battery_discharge: f32,
    /// Solar generation with nowhere to go.
    pub curtailed: f32,
}

/// Priority policy for allocating each step's energy flows.
///
/// The policy is selected once at configuration time; per-step dispatch is
/// a closed-enum match, never a string comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchStrategy {
    /// Serve load first, charge second, export third.
    #[default]
    LoadPriority,
    /// Charge first, serve load second, export third.
    ChargePriority,
    /// Export first, charge second, serve load third.
    ProducePriority,
}

impl DispatchStrategy {
    /// Configuration names of the available strategies.
    pub const NAMES: &[&str] = &["LOAD_PRIORITY", "CHARGE_PRIORITY", "PRODUCE_PRIORITY"];

    /// Selects a strategy by its configuration name.
    ///
    /// Unrecognized names fall back to [`DispatchStrategy::LoadPriority`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "CHARGE_PRIORITY" => Self::ChargePriority,
            "PRODUCE_PRIORITY" => Self::ProducePriority,
            _ => Self::LoadPriority,
        }
    }

    /// Allocates this step's energy flows.
    ///
    /// Battery charge/discharge happen as immediate side effects on
    /// `battery` during the call; calling this twice for the same step
    /// mutates the battery twice.
    ///
    /// # Arguments
    ///
    /// * `solar_kw` - AC solar generation this step
    /// * `load_kw` - Household demand this step
    /// * `battery` - Battery handle, mutated by charge/discharge
    /// * `export_limit_kw` - Grid export ceiling
    pub fn decide_energy_flow(
        self,
        solar_kw: f32,
        load_kw: f32,
        battery: &mut Battery,
        export_limit_kw: f32,
    ) -> EnergyFlow {
        match self {
            Self::LoadPriority => load_priority(solar_kw, load_kw, battery, export_limit_kw),
            Self::ChargePriority => charge_priority(solar_kw, load_kw, battery, export_limit_kw),
            Self::ProducePriority => produce_priority(solar_kw, load_kw, battery, export_limit_kw),
        }
    }
}

/// Load first: solar serves the house, deficit comes from battery then
/// grid; surplus charges the battery, then exports, then curtails.
fn load_priority(solar: f32, load: f32, battery: &mut Battery, export_limit: f32) -> EnergyFlow {
    let mut flow = EnergyFlow::default();
    let mut excess;

    if solar >= load {
        flow.solar_to_load = load;
        excess = solar - load;
    } else {
        flow.solar_to_load = solar;
        excess = 0.0;
        let deficit = load - solar;

        flow.battery_discharge = battery.discharge(deficit);
        let remaining_deficit = deficit - flow.battery_discharge;
        if remaining_deficit > 0.0 {
            flow.grid_import = remaining_deficit;
        }
    }

    if excess > 0.0 {
        flow.solar_to_battery = battery.charge(excess);
        excess -= flow.solar_to_battery;
    }

    if excess > 0.0 {
        let exported = excess.min(export_limit);
        flow.solar_to_grid = exported;
        excess -= exported;
    }

    if excess > 0.0 {
        flow.curtailed = excess;
    }

    flow
}

/// Charge first: solar fills the battery, then serves the house, then
/// exports. A same-step deficit is covered entirely from the grid; the
/// battery just charged is deliberately not discharged in the same step.
fn charge_priority(solar: f32, load: f32, battery: &mut Battery, export_limit: f32) -> EnergyFlow {
    let mut flow = EnergyFlow::default();
    let mut remaining = solar;

    if remaining > 0.0 {
        flow.solar_to_battery = battery.charge(remaining);
        remaining -= flow.solar_to_battery;
    }

    if remaining >= load {
        flow.solar_to_load = load;
        remaining -= load;
    } else {
        flow.solar_to_load = remaining;
        flow.grid_import = load - remaining;
        remaining = 0.0;
    }

    if remaining > 0.0 {
        let exported = remaining.min(export_limit);
        flow.solar_to_grid = exported;
        remaining -= exported;
    }

    flow.curtailed = remaining;
    flow
}

/// Export first: solar exports up to the grid limit, then charges the
/// battery, then serves the house; a residual deficit is covered from
/// battery discharge, then grid import.
fn produce_priority(solar: f32, load: f32, battery: &mut Battery, export_limit: f32) -> EnergyFlow {
    let mut flow = EnergyFlow::default();
    let mut remaining = solar;

    let exported = remaining.min(export_limit);
    flow.solar_to_grid = exported;
    remaining -= exported;

    if remaining > 0.0 {
        flow.solar_to_battery = battery.charge(remaining);
        remaining -= flow.solar_to_battery;
    }

    if remaining >= load {
        flow.solar_to_load = load;
        remaining -= load;
    } else {
        flow.solar_to_load = remaining;
        let deficit = load - remaining;
        remaining = 0.0;

        flow.battery_discharge = battery.discharge(deficit);
        flow.grid_import = deficit - flow.battery_discharge;
    }

    flow.curtailed = remaining;
    flow
}
