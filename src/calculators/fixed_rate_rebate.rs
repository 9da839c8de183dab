//! Fixed Rate Rebate
//!
//! Pays a percentage of the product price for every unit of volume.

use tracing::{debug, warn};

use crate::{
    calculators::{Calculation, checked_product, eligible_product, volume},
    incentives::IncentiveKind,
    products::Product,
    rebates::Rebate,
    requests::CalculateRebateRequest,
};

/// Calculate a fixed rate rebate.
///
/// The amount is `price * percentage * volume`, unrounded. A missing request
/// is treated the same as a zero volume. An amount that overflows, or that
/// needs more than 28 decimal places, fails the calculation.
pub fn calculate(
    rebate: &Rebate,
    product: Option<&Product>,
    request: Option<&CalculateRebateRequest>,
) -> Calculation {
    let Some(product) = product else {
        debug!(rebate = %rebate.identifier, "no product for fixed rate rebate");

        return Calculation::failed();
    };

    let Some(product) = eligible_product(Some(product), IncentiveKind::FixedRateRebate) else {
        debug!(
            rebate = %rebate.identifier,
            product = %product.identifier,
            "product not eligible for fixed rate rebate"
        );

        return Calculation::failed();
    };

    let volume = volume(request).unwrap_or_default();

    if rebate.percentage.is_zero() || product.price.is_zero() || volume.is_zero() {
        debug!(
            rebate = %rebate.identifier,
            product = %product.identifier,
            percentage = %rebate.percentage,
            price = %product.price,
            volume = %volume,
            "fixed rate rebate has a zero factor"
        );

        return Calculation::failed();
    }

    let Some(amount) = checked_product(&[product.price, rebate.percentage, volume]) else {
        warn!(
            rebate = %rebate.identifier,
            product = %product.identifier,
            percentage = %rebate.percentage,
            price = %product.price,
            volume = %volume,
            "fixed rate rebate amount is out of range"
        );

        return Calculation::failed();
    };

    Calculation::succeeded(amount)
}
