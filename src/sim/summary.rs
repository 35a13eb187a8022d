//! Post-hoc run summary computed from the complete record sequence.

use std::fmt;

use super::types::StepRecord;

/// Aggregate totals derived from a complete simulation run.
///
/// Computed post-hoc from `&[StepRecord]` so the summary always agrees
/// with the persisted step data.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Number of simulated days covered by the records.
    pub duration_days: u32,
    /// Total household consumption (kWh).
    pub total_load_kwh: f32,
    /// Total AC solar generation (kWh).
    pub total_solar_kwh: f32,
    /// Total energy imported from the grid (kWh).
    pub grid_import_kwh: f32,
    /// Total energy exported to the grid (kWh).
    pub grid_export_kwh: f32,
    /// Accumulated per-step cost divided by 100 (whole currency units).
    pub net_cost: f32,
}

impl SummaryReport {
    /// Computes the summary from the complete record sequence.
    pub fn from_records(records: &[StepRecord]) -> Self {
        let mut total_load = 0.0_f32;
        let mut total_solar = 0.0_f32;
        let mut total_import = 0.0_f32;
        let mut total_export = 0.0_f32;
        let mut total_cost = 0.0_f32;
        let mut last_day = 0_u32;

        for r in records {
            total_load += r.load_kw;
            total_solar += r.solar_gen_kw;
            total_import += r.grid_import_kw;
            total_export += r.grid_export_kw;
            total_cost += r.cost;
            last_day = last_day.max(r.day);
        }

        Self {
            duration_days: if records.is_empty() { 0 } else { last_day + 1 },
            total_load_kwh: total_load,
            total_solar_kwh: total_solar,
            grid_import_kwh: total_import,
            grid_export_kwh: total_export,
            net_cost: total_cost / 100.0,
        }
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Simulation Summary ---")?;
        writeln!(f, "Duration:     {} days", self.duration_days)?;
        writeln!(f, "Total load:   {:.2} kWh", self.total_load_kwh)?;
        writeln!(f, "Total solar:  {:.2} kWh", self.total_solar_kwh)?;
        writeln!(f, "Grid import:  {:.2} kWh", self.grid_import_kwh)?;
        writeln!(f, "Grid export:  {:.2} kWh", self.grid_export_kwh)?;
        write!(f, "Net cost:     {:.2}", self.net_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, load: f32, solar: f32, import: f32, export: f32, cost: f32) -> StepRecord {
        StepRecord {
            time_min: day * 1440,
            day,
            hour: 0.0,
            solar_gen_kw: solar,
            load_kw: load,
            battery_soc_kwh: 5.0,
            grid_import_kw: import,
            grid_export_kw: export,
            cost,
            cloud_cover: 0.2,
        }
    }

    #[test]
    fn test_totals() {
        let records = vec![
            record(0, 1.0, 2.0, 0.5, 1.0, -0.4),
            record(0, 2.0, 0.0, 2.0, 0.0, 1.5),
            record(1, 1.5, 3.0, 0.0, 2.5, -2.25),
        ];
        let summary = SummaryReport::from_records(&records);
        assert_eq!(summary.duration_days, 2);
        assert!((summary.total_load_kwh - 4.5).abs() < 1e-5);
        assert!((summary.total_solar_kwh - 5.0).abs() < 1e-5);
        assert!((summary.grid_import_kwh - 2.5).abs() < 1e-5);
        assert!((summary.grid_export_kwh - 3.5).abs() < 1e-5);
        assert!((summary.net_cost - (-1.15 / 100.0)).abs() < 1e-6);
    }

    #[test]
    fn test_empty_records() {
        let summary = SummaryReport::from_records(&[]);
        assert_eq!(summary.duration_days, 0);
        assert_eq!(summary.total_load_kwh, 0.0);
        assert_eq!(summary.net_cost, 0.0);
    }

    #[test]
    fn test_display_does_not_panic() {
        let summary = SummaryReport::from_records(&[record(0, 1.0, 2.0, 0.5, 1.0, -0.4)]);
        let s = format!("{summary}");
        assert!(s.contains("Duration"));
        assert!(s.contains("Net cost"));
    }
}
