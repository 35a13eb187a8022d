//! CSV export for simulation step records.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::StepRecord;

/// Column header for CSV result export.
const HEADER: &str = "time_min,day,hour,solar_gen_kw,load_kw,battery_soc_kwh,\
                      grid_import_kw,grid_export_kw,cost,cloud_cover";

/// Exports simulation records to a CSV file at the given path.
///
/// Writes a header row followed by one data row per step. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[StepRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes simulation records as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[StepRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(',').map(str::trim))?;

    // Data rows
    for r in records {
        wtr.write_record(&[
            r.time_min.to_string(),
            r.day.to_string(),
            format!("{:.2}", r.hour),
            format!("{:.4}", r.solar_gen_kw),
            format!("{:.4}", r.load_kw),
            format!("{:.4}", r.battery_soc_kwh),
            format!("{:.4}", r.grid_import_kw),
            format!("{:.4}", r.grid_export_kw),
            format!("{:.4}", r.cost),
            format!("{:.4}", r.cloud_cover),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(t: u32) -> StepRecord {
        StepRecord {
            time_min: t * 60,
            day: t / 24,
            hour: (t % 24) as f32,
            solar_gen_kw: 2.5,
            load_kw: 0.8,
            battery_soc_kwh: 6.1,
            grid_import_kw: 0.0,
            grid_export_kw: 1.2,
            cost: -1.08,
            cloud_cover: 0.35,
        }
    }

    #[test]
    fn header_matches_record_fields() {
        let records = vec![make_record(0)];
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(
            first_line,
            "time_min,day,hour,solar_gen_kw,load_kw,battery_soc_kwh,\
             grid_import_kw,grid_export_kw,cost,cloud_cover"
        );
    }

    #[test]
    fn row_count_matches_record_count() {
        let records: Vec<StepRecord> = (0..48).map(make_record).collect();
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).ok();
        let output = String::from_utf8(buf).unwrap_or_default();
        // header + one line per record
        assert_eq!(output.lines().count(), 49);
    }

    #[test]
    fn output_is_deterministic() {
        let records: Vec<StepRecord> = (0..24).map(make_record).collect();
        let mut a = Vec::new();
        let mut b = Vec::new();
        write_csv(&records, &mut a).ok();
        write_csv(&records, &mut b).ok();
        assert_eq!(a, b);
    }

    #[test]
    fn values_are_formatted() {
        let records = vec![make_record(13)];
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).ok();
        let output = String::from_utf8(buf).unwrap_or_default();
        let row = output.lines().nth(1).unwrap_or("");
        assert_eq!(row, "780,0,13.00,2.5000,0.8000,6.1000,0.0000,1.2000,-1.0800,0.3500");
    }
}
