//! Incentive Calculators
//!
//! One pure rule function per incentive kind. Every calculator shares the
//! [`Calculator`] signature and returns a [`Calculation`]; none of them
//! mutate their inputs or fail with an error.

use rust_decimal::Decimal;

use crate::{
    incentives::IncentiveKind, products::Product, rebates::Rebate,
    requests::CalculateRebateRequest,
};

pub mod amount_per_unit_of_measure;
pub mod fixed_cash_amount;
pub mod fixed_rate_rebate;

/// Signature shared by every incentive calculator.
pub type Calculator =
    fn(&Rebate, Option<&Product>, Option<&CalculateRebateRequest>) -> Calculation;

/// Result of evaluating a single rebate.
///
/// The amount of a failed calculation is always zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculation {
    success: bool,
    amount: Decimal,
}

impl Calculation {
    /// A failed calculation
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            success: false,
            amount: Decimal::ZERO,
        }
    }

    /// A successful calculation of `amount`
    #[must_use]
    pub const fn succeeded(amount: Decimal) -> Self {
        Self {
            success: true,
            amount,
        }
    }

    /// Returns true if a rebate amount was calculated
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the calculated amount, zero on failure
    pub const fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Returns the calculator for a kind, or `None` if the kind has no rule.
pub fn calculator_for(kind: IncentiveKind) -> Option<Calculator> {
    let calculator: Calculator = match kind {
        IncentiveKind::FixedCashAmount => fixed_cash_amount::calculate,
        IncentiveKind::FixedRateRebate => fixed_rate_rebate::calculate,
        IncentiveKind::AmountPerUnitOfMeasure => amount_per_unit_of_measure::calculate,
        IncentiveKind::Unrecognized => return None,
    };

    Some(calculator)
}

/// Returns the product if it is present and accepts `kind`.
///
/// An absent product is never eligible.
pub fn eligible_product(product: Option<&Product>, kind: IncentiveKind) -> Option<&Product> {
    product.filter(|product| product.supports(kind))
}

/// Multiplies non-zero factors without rounding them away.
///
/// Returns `None` if the product overflows, or if it is too small to be
/// represented within 28 decimal places and would come out as zero.
fn checked_product(factors: &[Decimal]) -> Option<Decimal> {
    let product = factors
        .iter()
        .try_fold(Decimal::ONE, |acc, factor| acc.checked_mul(*factor))?;

    (!product.is_zero()).then_some(product)
}

/// Volume of the request, if there is one.
fn volume(request: Option<&CalculateRebateRequest>) -> Option<Decimal> {
    request.map(|request| request.volume)
}

#[cfg(test)]
pub(crate) mod test_support {
    use rust_decimal::Decimal;

    use crate::{
        incentives::IncentiveKind, products::Product, rebates::Rebate,
        requests::CalculateRebateRequest,
    };

    pub(crate) fn product(price: i64, kind: IncentiveKind) -> Product {
        Product::new("widget", Decimal::from(price)).supporting(kind)
    }

    pub(crate) fn rebate(kind: IncentiveKind, amount: i64, percentage: i64) -> Rebate {
        Rebate::new("rebate", kind)
            .with_amount(Decimal::from(amount))
            .with_percentage(Decimal::from(percentage))
    }

    pub(crate) fn request(volume: i64) -> CalculateRebateRequest {
        CalculateRebateRequest::new("rebate", "widget", Decimal::from(volume))
    }
}
