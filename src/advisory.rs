// 🚦 Advisory Classifier - monthly kWh → OK / WARNING / ALERT
// Thresholds are strict `>` comparisons, checked from the highest tier down.

use serde::{Deserialize, Serialize};

/// Above this many kWh/month an appliance is flagged as ALERT
pub const ALERT_THRESHOLD_KWH: f64 = 50.0;

/// Above this many kWh/month (and up to the alert threshold) it is a WARNING
pub const WARNING_THRESHOLD_KWH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Ok,
    Warning,
    Alert,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Ok => "OK",
            Tier::Warning => "WARNING",
            Tier::Alert => "ALERT",
        }
    }

    /// Advice shown next to the badge
    pub fn recommendation(&self) -> &'static str {
        match self {
            Tier::Alert => "Reduce hours, unplug it, or replace it with a more efficient unit.",
            Tier::Warning => "Reduce usage hours or enable a power-saving mode.",
            Tier::Ok => "Unplug it when not in use.",
        }
    }
}

/// Classify a monthly consumption figure. First match wins.
pub fn classify(monthly_energy_kwh: f64) -> Tier {
    if monthly_energy_kwh > ALERT_THRESHOLD_KWH {
        Tier::Alert
    } else if monthly_energy_kwh > WARNING_THRESHOLD_KWH {
        Tier::Warning
    } else {
        Tier::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(30.0), Tier::Ok);
        assert_eq!(classify(30.0001), Tier::Warning);
        assert_eq!(classify(50.0), Tier::Warning);
        assert_eq!(classify(50.0001), Tier::Alert);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(0.0), Tier::Ok);
        assert_eq!(classify(108.0), Tier::Alert);
        assert_eq!(classify(1.5), Tier::Ok);
    }

    #[test]
    fn test_labels_and_advice() {
        assert_eq!(Tier::Alert.label(), "ALERT");
        assert_eq!(Tier::Warning.label(), "WARNING");
        assert_eq!(Tier::Ok.label(), "OK");
        assert!(Tier::Ok.recommendation().contains("Unplug"));
        assert!(Tier::Warning.recommendation().contains("power-saving"));
        assert!(Tier::Alert.recommendation().contains("more efficient"));
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Tier::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
    }
}
