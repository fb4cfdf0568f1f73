//! Tracing subscriber setup shared by both binaries

use tracing_subscriber::EnvFilter;

/// Filter directive for our crates plus HTTP request spans
pub fn filter_directive(level: &str) -> String {
    format!("appliance_energy={level},energy_server={level},tower_http={level}")
}

/// Install a stderr fmt subscriber. Safe to call more than once.
pub fn init_tracing(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .with_env_filter(EnvFilter::new(filter_directive(level)))
        .try_init();
}
