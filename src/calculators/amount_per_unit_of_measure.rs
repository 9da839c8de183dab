//! Amount Per Unit Of Measure
//!
//! Pays the rebate amount for every unit of volume.

use tracing::{debug, warn};

use crate::{
    calculators::{Calculation, checked_product, eligible_product, volume},
    incentives::IncentiveKind,
    products::Product,
    rebates::Rebate,
    requests::CalculateRebateRequest,
};

/// Calculate an amount per unit of measure rebate.
///
/// A missing request is treated the same as a zero volume. An amount that
/// overflows, or that needs more than 28 decimal places, fails the
/// calculation.
pub fn calculate(
    rebate: &Rebate,
    product: Option<&Product>,
    request: Option<&CalculateRebateRequest>,
) -> Calculation {
    let Some(product) = product else {
        debug!(rebate = %rebate.identifier, "no product for amount per unit of measure");

        return Calculation::failed();
    };

    if eligible_product(Some(product), IncentiveKind::AmountPerUnitOfMeasure).is_none() {
        debug!(
            rebate = %rebate.identifier,
            product = %product.identifier,
            "product not eligible for amount per unit of measure"
        );

        return Calculation::failed();
    }

    let volume = volume(request).unwrap_or_default();

    if rebate.amount.is_zero() || volume.is_zero() {
        debug!(
            rebate = %rebate.identifier,
            amount = %rebate.amount,
            volume = %volume,
            "amount per unit of measure has a zero factor"
        );

        return Calculation::failed();
    }

    let Some(amount) = checked_product(&[rebate.amount, volume]) else {
        warn!(
            rebate = %rebate.identifier,
            amount = %rebate.amount,
            volume = %volume,
            "amount per unit of measure is out of range"
        );

        return Calculation::failed();
    };

    Calculation::succeeded(amount)
}
