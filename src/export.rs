// 📤 Export Builder - entries → CSV bytes
// Writes the stored values as-is; nothing is re-derived on the way out.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::ExportError;
use crate::store::ApplianceEntry;

/// Column order of the exported table
pub const HEADER: [&str; 6] = [
    "name",
    "power_watts",
    "hours_per_day",
    "monthly_energy_kwh",
    "monthly_cost",
    "created_at",
];

pub const CONTENT_TYPE: &str = "text/csv; charset=utf-8";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    power_watts: f64,
    hours_per_day: f64,
    monthly_energy_kwh: f64,
    monthly_cost: f64,
    created_at: String,
}

impl<'a> From<&'a ApplianceEntry> for ExportRow<'a> {
    fn from(entry: &'a ApplianceEntry) -> Self {
        ExportRow {
            name: entry.name(),
            power_watts: entry.power_watts(),
            hours_per_day: entry.hours_per_day(),
            monthly_energy_kwh: entry.monthly_energy_kwh(),
            monthly_cost: entry.monthly_cost(),
            created_at: entry.created_at().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Serialize entries into a complete in-memory CSV document.
///
/// The header is always written, so an empty slice yields a header-only table.
pub fn to_csv(entries: &[ApplianceEntry]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for entry in entries {
        writer.serialize(ExportRow::from(entry))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))
}

/// Download name for an export taken at `now`
pub fn filename(now: NaiveDateTime) -> String {
    format!("consumo_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
