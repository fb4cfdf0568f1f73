// ⚡ Consumption Calculator - watts × hours → kWh/month → cost
// Pure arithmetic, no rounding. Display rounding belongs to the page renderer.

use serde::Serialize;

// ============================================================================
// TARIFF CONSTANTS
// ============================================================================

/// Price of one kWh, in `CURRENCY` units. Fixed for the process lifetime.
pub const TARIFF_PER_KWH: f64 = 700.0;

/// Currency the tariff is expressed in
pub const CURRENCY: &str = "COP";

/// Billing month length used for the monthly projection
pub const DAYS_PER_MONTH: f64 = 30.0;

pub const WATTS_PER_KILOWATT: f64 = 1000.0;

// ============================================================================
// CONSUMPTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Consumption {
    pub monthly_energy_kwh: f64,
    pub monthly_cost: f64,
}

/// Energy used in one day, in kWh
pub fn daily_energy_kwh(power_watts: f64, hours_per_day: f64) -> f64 {
    power_watts * hours_per_day / WATTS_PER_KILOWATT
}

/// Project monthly energy and cost for one appliance.
///
/// Inputs are expected to be non-negative and finite; validation is the
/// caller's job (see `input::ApplianceForm::validate`).
pub fn compute(power_watts: f64, hours_per_day: f64) -> Consumption {
    let monthly_energy_kwh = daily_energy_kwh(power_watts, hours_per_day) * DAYS_PER_MONTH;

    Consumption {
        monthly_energy_kwh,
        monthly_cost: monthly_energy_kwh * TARIFF_PER_KWH,
    }
}

// ============================================================================
// TESTS
// ============================================================================
