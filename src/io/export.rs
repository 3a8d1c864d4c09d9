//! CSV export of the per-appliance energy breakdown.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::loads::ApplianceLoad;

/// Column header for the appliance breakdown CSV.
const HEADER: &str = "id,name,circuit,power_w,quantity,hours_per_day,daily_wh";

/// Exports the appliance breakdown to a CSV file at the given path.
///
/// Writes a header row followed by one data row per load. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_loads_csv(loads: &[ApplianceLoad], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_loads_csv(loads, buf)
}

/// Writes the appliance breakdown as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_loads_csv(loads: &[ApplianceLoad], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // Data rows
    for load in loads {
        wtr.write_record(&[
            load.id.0.to_string(),
            load.name.clone(),
            load.circuit.to_string(),
            format!("{:.1}", load.power_w),
            load.quantity.to_string(),
            format!("{:.2}", load.hours_per_day),
            format!("{:.1}", load.daily_energy_wh()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
