//! Calculation requests and results

use rust_decimal::Decimal;

use crate::identifiers::{ProductIdentifier, RebateIdentifier};

/// A request to calculate the rebate owed on a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculateRebateRequest {
    /// Rebate to apply
    pub rebate_identifier: RebateIdentifier,

    /// Product the transaction was for
    pub product_identifier: ProductIdentifier,

    /// Transaction quantity
    pub volume: Decimal,
}

impl CalculateRebateRequest {
    /// Create a new request
    pub fn new(
        rebate_identifier: impl Into<RebateIdentifier>,
        product_identifier: impl Into<ProductIdentifier>,
        volume: Decimal,
    ) -> Self {
        Self {
            rebate_identifier: rebate_identifier.into(),
            product_identifier: product_identifier.into(),
            volume,
        }
    }
}

/// Outcome of a calculation.
///
/// Carries only the success flag; the amount goes to the result sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculateRebateResult {
    /// Whether a rebate amount was calculated
    pub success: bool,
}
