//! Calculation Report
//!
//! Renders the outcome of a single calculation as a table.

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    calculators::Calculation,
    identifiers::{ProductIdentifier, RebateIdentifier},
    incentives::IncentiveKind,
    rebates::Rebate,
    requests::CalculateRebateRequest,
};

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output failed
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Summary of one calculation
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationReport {
    rebate_identifier: RebateIdentifier,
    product_identifier: ProductIdentifier,
    incentive: Option<IncentiveKind>,
    volume: Decimal,
    success: bool,
    amount: Decimal,
}

impl CalculationReport {
    /// Build a report for a request.
    ///
    /// `rebate` is the resolved rebate, if any.
    pub fn new(
        request: &CalculateRebateRequest,
        rebate: Option<&Rebate>,
        calculation: Calculation,
    ) -> Self {
        Self {
            rebate_identifier: request.rebate_identifier.clone(),
            product_identifier: request.product_identifier.clone(),
            incentive: rebate.map(|rebate| rebate.incentive),
            volume: request.volume,
            success: calculation.is_success(),
            amount: calculation.amount(),
        }
    }

    /// Returns true if the calculation succeeded
    pub fn success(&self) -> bool {
        self.success
    }

    /// Returns the calculated amount, zero on failure
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Write the report as a table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        let mut builder = Builder::default();

        builder.push_record(["Rebate", "Product", "Incentive", "Volume", "Outcome", "Amount"]);

        builder.push_record([
            self.rebate_identifier.to_string(),
            self.product_identifier.to_string(),
            self.incentive
                .map_or_else(|| String::from("-"), |kind| kind.to_string()),
            self.volume.to_string(),
            String::from(if self.success { "calculated" } else { "failed" }),
            self.amount.to_string(),
        ]);

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Alignment::center());
        table.modify(Columns::new(3..), Alignment::right());

        writeln!(out, "{table}")?;

        Ok(())
    }
}
