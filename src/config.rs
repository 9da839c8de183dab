//! Command line configuration

use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

use crate::requests::CalculateRebateRequest;

/// Calculate the rebate owed on a transaction
#[derive(Debug, Parser)]
#[command(name = "rebates", about = "Rebate calculator", long_about = None)]
pub struct CalculateArgs {
    /// YAML data file with rebates and products
    #[arg(short, long, env = "REBATES_DATA", default_value = "fixtures/rebates.yml")]
    pub data: PathBuf,

    /// Rebate identifier
    #[arg(short, long)]
    pub rebate: String,

    /// Product identifier
    #[arg(short, long)]
    pub product: String,

    /// Transaction volume
    #[arg(short, long, default_value = "1")]
    pub volume: Decimal,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl CalculateArgs {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Build the calculation request described by the arguments
    pub fn request(&self) -> CalculateRebateRequest {
        CalculateRebateRequest::new(self.rebate.as_str(), self.product.as_str(), self.volume)
    }
}
