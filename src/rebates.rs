//! Rebates

use rust_decimal::Decimal;

use crate::{identifiers::RebateIdentifier, incentives::IncentiveKind};

/// A rebate definition.
///
/// Owned by whoever stores rebates; the engine only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rebate {
    /// Rebate identifier
    pub identifier: RebateIdentifier,

    /// Incentive kind, fixed when the rebate is created
    pub incentive: IncentiveKind,

    /// Cash amount, used by fixed cash and per-unit incentives
    pub amount: Decimal,

    /// Fraction of the product price, used by fixed rate incentives.
    ///
    /// Expected to be within `0..=1`, but not enforced.
    pub percentage: Decimal,
}

impl Rebate {
    /// Create a rebate with a zero amount and percentage
    pub fn new(identifier: impl Into<RebateIdentifier>, incentive: IncentiveKind) -> Self {
        Self {
            identifier: identifier.into(),
            incentive,
            amount: Decimal::ZERO,
            percentage: Decimal::ZERO,
        }
    }

    /// Set the cash amount
    #[must_use]
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Set the percentage
    #[must_use]
    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = percentage;
        self
    }
}
