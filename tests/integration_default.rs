//! Integration tests for the default (baseline) scenario.

mod common;

use microgrid_sim::io::export::write_csv;
use microgrid_sim::sim::summary::SummaryReport;

#[test]
fn one_day_hourly_run_produces_24_records() {
    let records = common::run(&common::scenario(1));
    assert_eq!(records.len(), 24);
    assert!(records.iter().all(|r| r.day == 0));
    for pair in records.windows(2) {
        assert!(pair[1].hour > pair[0].hour, "hour should strictly increase");
    }
}

#[test]
fn fixed_seed_run_is_reproducible() {
    let cfg = common::scenario(5);
    assert_eq!(common::run(&cfg), common::run(&cfg));
}

#[test]
fn records_satisfy_physical_bounds() {
    let cfg = common::scenario(10);
    let records = common::run(&cfg);
    assert_eq!(records.len(), 240);
    for r in &records {
        assert!((0.0..=1.0).contains(&r.cloud_cover));
        assert!(r.solar_gen_kw >= 0.0);
        assert!(r.solar_gen_kw <= cfg.solar.inverter_max_kw);
        assert!(r.load_kw >= cfg.load.base_load_kw);
        assert!(r.grid_import_kw >= 0.0);
        assert!(r.grid_export_kw >= 0.0);
        assert!(r.grid_export_kw <= cfg.grid.export_limit_kw + 1e-5);
        assert!(r.battery_soc_kwh <= cfg.battery.capacity + 1e-4);
    }
}

#[test]
fn step_costs_are_consistent_with_prices() {
    let cfg = common::scenario(3);
    for r in common::run(&cfg) {
        let expected = r.grid_import_kw * cfg.grid.cost_import_cents
            - r.grid_export_kw * cfg.grid.price_export_cents;
        assert!((r.cost - expected).abs() < 1e-4);
    }
}

#[test]
fn summary_totals_match_records() {
    let records = common::run(&common::scenario(2));
    let summary = SummaryReport::from_records(&records);
    assert_eq!(summary.duration_days, 2);

    let load_sum: f32 = records.iter().map(|r| r.load_kw).sum();
    assert!((summary.total_load_kwh - load_sum).abs() < 1e-3);

    let cost_sum: f32 = records.iter().map(|r| r.cost).sum();
    assert!((summary.net_cost - cost_sum / 100.0).abs() < 1e-5);
}

#[test]
fn csv_export_has_one_row_per_record() {
    let records = common::run(&common::scenario(2));
    let mut buf = Vec::new();
    write_csv(&records, &mut buf).expect("in-memory write should not fail");
    let output = String::from_utf8(buf).expect("CSV output should be UTF-8");
    assert_eq!(output.lines().count(), records.len() + 1);
    assert!(output.starts_with("time_min,day,hour,"));
}
