//! Rebate Calculation Engine
//!
//! Dispatches a rebate to the calculator for its incentive kind. Absent
//! inputs are ordinary branches here, never errors.

use tracing::{debug, warn};

use crate::{
    calculators::{Calculation, calculator_for},
    products::Product,
    rebates::Rebate,
    requests::CalculateRebateRequest,
};

/// Evaluate the incentive of a rebate against a product and request.
///
/// Returns a failed [`Calculation`] when the rebate is absent or its incentive
/// kind is unrecognized; otherwise the outcome of the matching calculator.
pub fn evaluate_incentive(
    rebate: Option<&Rebate>,
    product: Option<&Product>,
    request: Option<&CalculateRebateRequest>,
) -> Calculation {
    let Some(rebate) = rebate else {
        debug!("no rebate to evaluate");

        return Calculation::failed();
    };

    let Some(calculator) = calculator_for(rebate.incentive) else {
        warn!(
            rebate = %rebate.identifier,
            incentive = %rebate.incentive,
            "rebate has an unrecognized incentive kind"
        );

        return Calculation::failed();
    };

    calculator(rebate, product, request)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::{
        calculators::test_support::{product, rebate, request},
        incentives::{IncentiveKind, SupportedIncentives},
    };

    #[test]
    fn absent_rebate_always_fails() {
        let widget = Product {
            supported_incentives: SupportedIncentives::all(),
            ..product(2, IncentiveKind::FixedCashAmount)
        };

        assert_eq!(evaluate_incentive(None, None, None), Calculation::failed());
        assert_eq!(
            evaluate_incentive(None, Some(&widget), Some(&request(2))),
            Calculation::failed()
        );
    }

    #[test]
    fn unrecognized_kind_fails() {
        let rebate = rebate(IncentiveKind::Unrecognized, 1, 1);
        let widget = Product {
            supported_incentives: SupportedIncentives::all(),
            ..product(2, IncentiveKind::FixedCashAmount)
        };

        assert_eq!(
            evaluate_incentive(Some(&rebate), Some(&widget), Some(&request(2))),
            Calculation::failed()
        );
    }

    #[test]
    fn dispatches_on_incentive_kind() {
        let widget = Product {
            supported_incentives: SupportedIncentives::all(),
            ..product(3, IncentiveKind::FixedCashAmount)
        };
        let request = request(2);

        let cases = [
            (IncentiveKind::FixedCashAmount, Decimal::from(5)),
            (IncentiveKind::FixedRateRebate, Decimal::from(6)),
            (IncentiveKind::AmountPerUnitOfMeasure, Decimal::from(10)),
        ];

        for (kind, expected) in cases {
            let rebate = rebate(kind, 5, 1);

            let calculation = evaluate_incentive(Some(&rebate), Some(&widget), Some(&request));

            assert_eq!(calculation, Calculation::succeeded(expected), "{kind}");
        }
    }

    #[test]
    fn absent_product_fails_for_every_kind() {
        for kind in IncentiveKind::KNOWN {
            let rebate = rebate(kind, 1, 1);

            assert_eq!(
                evaluate_incentive(Some(&rebate), None, Some(&request(1))),
                Calculation::failed(),
                "{kind}"
            );
        }
    }
}
