// Appliance Energy - Core Library
// Exposes all modules for use in the CLI, the web server, and tests

pub mod advisory;   // OK / WARNING / ALERT tiers
pub mod calculator; // kWh and cost projection
pub mod config;
pub mod error;
pub mod export;     // CSV export
pub mod input;      // Form validation
pub mod logging;
pub mod store;      // In-memory record store
pub mod summary;

// Only compile the HTTP surface when the server feature is enabled
#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use advisory::{classify, Tier};
pub use calculator::{compute, Consumption, CURRENCY, TARIFF_PER_KWH};
pub use config::ServerConfig;
pub use error::{ExportError, InputError};
pub use input::{ApplianceForm, NewAppliance};
pub use store::{ApplianceEntry, RecordStore};
pub use summary::{Summary, SummaryRow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
