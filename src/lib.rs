#![doc(test(attr(deny(warnings))))]

//! Record Keeper bundles two small terminal record keepers: an expense
//! tracker persisted to a flat text file and an in-memory student grade
//! manager.

pub mod cli;
pub mod config;
pub mod errors;
pub mod expense;
pub mod grades;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Record Keeper tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::from_default_env().add_directive("record_keeper=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
