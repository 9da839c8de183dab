//! Fixed Cash Amount
//!
//! Pays the rebate amount as-is. Volume is never consulted.

use tracing::debug;

use crate::{
    calculators::{Calculation, eligible_product},
    incentives::IncentiveKind,
    products::Product,
    rebates::Rebate,
    requests::CalculateRebateRequest,
};

/// Calculate a fixed cash amount rebate.
pub fn calculate(
    rebate: &Rebate,
    product: Option<&Product>,
    _request: Option<&CalculateRebateRequest>,
) -> Calculation {
    if eligible_product(product, IncentiveKind::FixedCashAmount).is_none() {
        debug!(rebate = %rebate.identifier, "product missing or not eligible for fixed cash amount");

        return Calculation::failed();
    }

    if rebate.amount.is_zero() {
        debug!(rebate = %rebate.identifier, "fixed cash amount is zero");

        return Calculation::failed();
    }

    Calculation::succeeded(rebate.amount)
}
