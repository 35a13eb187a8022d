//! Simulation engine driving the per-step sequence.

use crate::config::ScenarioConfig;
use crate::devices::{Battery, Inverter, SolarPanel};
use crate::environment::{HomeLoad, Season, UtilityGrid, Weather};

use super::clock::{Clock, day_index, hour_of_day};
use super::strategy::DispatchStrategy;
use super::types::{SimConfig, StepRecord};

/// Seed offset for the weather RNG to avoid correlation with other components.
const WEATHER_SEED_OFFSET: u64 = 11;
/// Seed offset for the household load RNG.
const LOAD_SEED_OFFSET: u64 = 23;
/// Seed offset for the inverter failure RNG.
const INVERTER_SEED_OFFSET: u64 = 37;

/// Simulation engine owning the clock, all components, and the strategy.
///
/// Execution is strictly sequential and single-threaded: the engine
/// advances simulated time in fixed increments and no step begins before
/// the prior step's record is finalized. All mutable component state is
/// owned here and passed by reference into component calls within a step.
pub struct Engine {
    config: SimConfig,
    clock: Clock,
    battery: Battery,
    panel: SolarPanel,
    inverter: Inverter,
    weather: Weather,
    home_load: HomeLoad,
    grid: UtilityGrid,
    strategy: DispatchStrategy,
}

impl Engine {
    /// Creates a new simulation engine from already-built components.
    #[expect(clippy::too_many_arguments)]
    pub fn new(
        config: SimConfig,
        battery: Battery,
        panel: SolarPanel,
        inverter: Inverter,
        weather: Weather,
        home_load: HomeLoad,
        grid: UtilityGrid,
        strategy: DispatchStrategy,
    ) -> Self {
        let clock = Clock::new(config.total_minutes(), config.step_minutes);
        Self {
            config,
            clock,
            battery,
            panel,
            inverter,
            weather,
            home_load,
            grid,
            strategy,
        }
    }

    /// Builds an engine from a validated scenario configuration.
    ///
    /// Every stochastic component gets its own RNG seeded from the master
    /// seed plus a fixed per-component offset, so a run is fully
    /// determined by the scenario and seed.
    pub fn from_scenario(cfg: &ScenarioConfig) -> Self {
        let s = &cfg.simulation;
        let config = SimConfig::new(s.duration_days, s.time_step_minutes, s.seed);

        let b = &cfg.battery;
        let battery = Battery::new(b.capacity, b.efficiency, b.discharge_depth, b.initial_state);

        let sol = &cfg.solar;
        let panel = SolarPanel::new(sol.panel_peak_kw);
        let inverter = Inverter::new(
            sol.inverter_max_kw,
            sol.inverter_failure_rate,
            sol.failure_duration_min_hours,
            sol.failure_duration_max_hours,
            s.seed.wrapping_add(INVERTER_SEED_OFFSET),
        );

        let weather = Weather::new(
            Season::from_name(&s.season),
            s.seed.wrapping_add(WEATHER_SEED_OFFSET),
        );

        let l = &cfg.load;
        let home_load = HomeLoad::new(
            l.base_load_kw,
            l.peak_load_kw,
            l.peak_start_hour,
            l.peak_end_hour,
            s.seed.wrapping_add(LOAD_SEED_OFFSET),
        );

        let g = &cfg.grid;
        let grid = UtilityGrid::new(g.export_limit_kw, g.cost_import_cents, g.price_export_cents);

        let strategy = DispatchStrategy::from_name(&cfg.strategy.name);

        Self::new(config, battery, panel, inverter, weather, home_load, grid, strategy)
    }

    /// Executes one step at the given simulated time and returns its record.
    ///
    /// Per-step sequence: weather draw, solar generation, inverter
    /// clipping, load draw, dispatch (mutating the battery), costing,
    /// record.
    fn step_at(&mut self, time_min: u32) -> StepRecord {
        let hour = hour_of_day(time_min);
        let day = day_index(time_min);

        let cloud_cover = self.weather.cloud_coverage();
        let dc_solar_kw = self.panel.generation_kw(hour, cloud_cover);
        let ac_solar_kw = self.inverter.clip_power(dc_solar_kw);
        let load_kw = self.home_load.demand_kw(hour);

        let flow = self.strategy.decide_energy_flow(
            ac_solar_kw,
            load_kw,
            &mut self.battery,
            self.grid.export_limit_kw,
        );

        let cost = self.grid.cost(flow.grid_import, flow.solar_to_grid);

        StepRecord {
            time_min,
            day,
            hour,
            solar_gen_kw: ac_solar_kw,
            load_kw,
            battery_soc_kwh: self.battery.current_energy_kwh,
            grid_import_kw: flow.grid_import,
            grid_export_kw: flow.solar_to_grid,
            cost,
            cloud_cover,
        }
    }

    /// Runs the full horizon and returns the ordered record sequence.
    pub fn run(&mut self) -> Vec<StepRecord> {
        let mut records = Vec::with_capacity(self.config.total_steps() as usize);
        while let Some(t) = self.clock.tick() {
            records.push(self.step_at(t));
        }
        records
    }

    /// Returns a reference to the battery.
    pub fn battery(&self) -> &Battery {
        &self.battery
    }

    /// Returns a reference to the simulation configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
