// 📊 Summary Builder - per-row advice + monthly totals
// Sums the derived fields stored on each entry; nothing is recomputed here.

use serde::Serialize;

use crate::advisory::{self, Tier};
use crate::calculator::{CURRENCY, TARIFF_PER_KWH};
use crate::store::ApplianceEntry;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub entry: ApplianceEntry,
    pub tier: Tier,
    pub recommendation: &'static str,
}

impl SummaryRow {
    fn new(entry: ApplianceEntry) -> Self {
        let tier = advisory::classify(entry.monthly_energy_kwh());
        SummaryRow {
            entry,
            tier,
            recommendation: tier.recommendation(),
        }
    }
}

/// Everything the index page and `/api/summary` show
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    pub total_energy_kwh: f64,
    pub total_cost: f64,
    pub tariff_per_kwh: f64,
    pub currency: &'static str,
}

impl Summary {
    /// Build from an ordered entry snapshot; row order follows the input.
    pub fn build(entries: Vec<ApplianceEntry>) -> Self {
        let total_energy_kwh = entries.iter().map(|e| e.monthly_energy_kwh()).sum();
        let total_cost = entries.iter().map(|e| e.monthly_cost()).sum();

        Summary {
            rows: entries.into_iter().map(SummaryRow::new).collect(),
            total_energy_kwh,
            total_cost,
            tariff_per_kwh: TARIFF_PER_KWH,
            currency: CURRENCY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows in each tier, highest first
    pub fn tier_counts(&self) -> [(Tier, usize); 3] {
        let count = |tier: Tier| self.rows.iter().filter(|r| r.tier == tier).count();
        [
            (Tier::Alert, count(Tier::Alert)),
            (Tier::Warning, count(Tier::Warning)),
            (Tier::Ok, count(Tier::Ok)),
        ]
    }
}
