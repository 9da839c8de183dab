//! Rebates command line calculator

use std::{io, process, sync::Arc};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rebates::{
    config::CalculateArgs,
    report::CalculationReport,
    service::RebateService,
    store::{CalculationLog, DataStore},
};

/// Rebates entry point
pub fn main() {
    // Load configuration from .env and CLI arguments
    let config = CalculateArgs::load().unwrap_or_else(|e| e.exit());

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let store = match DataStore::load(&config.data) {
        Ok(store) => Arc::new(store),
        Err(load_error) => {
            error!("failed to load data store: {load_error}");

            process::exit(1);
        }
    };

    let log = Arc::new(CalculationLog::new());
    let service = RebateService::new(store, log.clone());

    let request = config.request();
    let outcome = service.calculate_outcome(&request);

    info!(
        success = outcome.calculation.is_success(),
        recorded = log.records().len(),
        "calculation finished"
    );

    let report = CalculationReport::new(&request, outcome.rebate.as_ref(), outcome.calculation);

    if let Err(report_error) = report.write_to(io::stdout().lock()) {
        error!("{report_error}");

        process::exit(1);
    }

    if !outcome.calculation.is_success() {
        process::exit(2);
    }
}
