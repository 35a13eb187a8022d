//! Shared test fixtures for integration tests.

use microgrid_sim::config::ScenarioConfig;
use microgrid_sim::sim::engine::Engine;
use microgrid_sim::sim::types::StepRecord;

/// Baseline scenario over the given number of days (hourly steps, seed 42).
pub fn scenario(days: u32) -> ScenarioConfig {
    let mut cfg = ScenarioConfig::baseline();
    cfg.simulation.duration_days = days;
    cfg
}

/// Baseline scenario with a named dispatch strategy.
pub fn scenario_with_strategy(days: u32, strategy: &str) -> ScenarioConfig {
    let mut cfg = scenario(days);
    cfg.strategy.name = strategy.to_string();
    cfg
}

/// Builds and runs an engine for the given scenario.
pub fn run(cfg: &ScenarioConfig) -> Vec<StepRecord> {
    Engine::from_scenario(cfg).run()
}
