// 📝 Input validation for the add-appliance form
// Every field arrives as text so parse failures become InputError, not extractor rejections.

use serde::Deserialize;

use crate::calculator;
use crate::error::InputError;
use crate::store::ApplianceEntry;

/// Longest raw value echoed back inside an error message
pub const MAX_ECHOED_CHARS: usize = 100;

/// Raw form submission. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplianceForm {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub power_watts: String,

    #[serde(default)]
    pub hours_per_day: String,
}

/// Input that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppliance {
    pub name: String,
    pub power_watts: f64,
    pub hours_per_day: f64,
}

impl ApplianceForm {
    pub fn new(name: &str, power_watts: &str, hours_per_day: &str) -> Self {
        ApplianceForm {
            name: name.to_string(),
            power_watts: power_watts.to_string(),
            hours_per_day: hours_per_day.to_string(),
        }
    }

    pub fn validate(&self) -> Result<NewAppliance, InputError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(InputError::EmptyName);
        }

        let power_watts = parse_non_negative("power_watts", &self.power_watts)?;
        let hours_per_day = parse_non_negative("hours_per_day", &self.hours_per_day)?;

        // Two finite inputs can still overflow once multiplied out
        if !calculator::compute(power_watts, hours_per_day).monthly_cost.is_finite() {
            return Err(InputError::OutOfRange);
        }

        Ok(NewAppliance {
            name: name.to_string(),
            power_watts,
            hours_per_day,
        })
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut with `…`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

impl NewAppliance {
    /// Turn into a stored entry, stamped now
    pub fn into_entry(self) -> ApplianceEntry {
        ApplianceEntry::new(self.name, self.power_watts, self.hours_per_day)
    }
}

fn parse_non_negative(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let value: f64 = raw.trim().parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: truncate_chars(raw, MAX_ECHOED_CHARS),
    })?;

    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }

    // -0.0 passes the check above; store it as plain zero
    Ok(value + 0.0)
}
