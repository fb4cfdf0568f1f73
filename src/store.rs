// 🗄️ Record Store - in-memory, insertion-ordered appliance entries
//
// One store per process, shared with every request through a cloneable handle.
// Entries are append-only: no update in place, no single delete, only `clear()`.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::calculator;

// ============================================================================
// APPLIANCE ENTRY
// ============================================================================

/// A recorded appliance with its monthly projection.
///
/// Derived fields are computed once in the constructor and have no setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplianceEntry {
    id: Uuid,
    name: String,
    power_watts: f64,
    hours_per_day: f64,
    monthly_energy_kwh: f64,
    monthly_cost: f64,
    created_at: NaiveDateTime,
}

impl ApplianceEntry {
    /// Create an entry stamped with the current local time
    pub fn new(name: impl Into<String>, power_watts: f64, hours_per_day: f64) -> Self {
        Self::recorded_at(name, power_watts, hours_per_day, Local::now().naive_local())
    }

    /// Create an entry with an explicit timestamp
    pub fn recorded_at(
        name: impl Into<String>,
        power_watts: f64,
        hours_per_day: f64,
        created_at: NaiveDateTime,
    ) -> Self {
        let consumption = calculator::compute(power_watts, hours_per_day);

        ApplianceEntry {
            id: Uuid::new_v4(),
            name: name.into(),
            power_watts,
            hours_per_day,
            monthly_energy_kwh: consumption.monthly_energy_kwh,
            monthly_cost: consumption.monthly_cost,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power_watts(&self) -> f64 {
        self.power_watts
    }

    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    pub fn monthly_energy_kwh(&self) -> f64 {
        self.monthly_energy_kwh
    }

    pub fn monthly_cost(&self) -> f64 {
        self.monthly_cost
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}

// ============================================================================
// RECORD STORE
// ============================================================================

/// Shared handle to the process-wide entry list.
///
/// Cloning is cheap and every clone sees the same entries. Each operation
/// takes the lock once and releases it before returning, so an append is
/// never observed half-done and no guard outlives a call.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    entries: Arc<RwLock<Vec<ApplianceEntry>>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end. Returns the new number of entries.
    pub fn append(&self, entry: ApplianceEntry) -> usize {
        let mut entries = self.write();
        entries.push(entry);
        entries.len()
    }

    /// Ordered snapshot of every entry
    pub fn list(&self) -> Vec<ApplianceEntry> {
        self.read().clone()
    }

    /// Drop every entry. Returns how many were discarded.
    pub fn clear(&self) -> usize {
        let mut entries = self.write();
        let removed = entries.len();
        entries.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave a half-pushed entry,
    // so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<ApplianceEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ApplianceEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// TESTS
// ============================================================================
