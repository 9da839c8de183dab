//! Calculation scenarios for each incentive kind, through the public API.

use rust_decimal::Decimal;

use rebates::prelude::*;

fn evaluate(
    rebate: Option<&Rebate>,
    product: Option<&Product>,
    volume: i64,
) -> (bool, Decimal) {
    let request = CalculateRebateRequest::new("rebate", "product", Decimal::from(volume));
    let calculation = evaluate_incentive(rebate, product, Some(&request));

    (calculation.is_success(), calculation.amount())
}

#[test]
fn fixed_cash_amount_for_supporting_product() {
    let rebate = Rebate::new("rebate", IncentiveKind::FixedCashAmount).with_amount(Decimal::ONE);
    let product = Product::new("product", Decimal::ZERO).supporting(IncentiveKind::FixedCashAmount);

    assert_eq!(evaluate(Some(&rebate), Some(&product), 0), (true, Decimal::ONE));
}

#[test]
fn fixed_cash_amount_for_product_supporting_fixed_rate_only() {
    let rebate = Rebate::new("rebate", IncentiveKind::FixedCashAmount).with_amount(Decimal::ONE);
    let product = Product::new("product", Decimal::ZERO).supporting(IncentiveKind::FixedRateRebate);

    assert_eq!(
        evaluate(Some(&rebate), Some(&product), 0),
        (false, Decimal::ZERO)
    );
}

#[test]
fn fixed_rate_rebate_multiplies_price_percentage_and_volume() {
    let rebate =
        Rebate::new("rebate", IncentiveKind::FixedRateRebate).with_percentage(Decimal::ONE);
    let product = Product::new("product", Decimal::TWO).supporting(IncentiveKind::FixedRateRebate);

    assert_eq!(
        evaluate(Some(&rebate), Some(&product), 2),
        (true, Decimal::from(4))
    );
}

#[test]
fn amount_per_unit_of_measure_multiplies_amount_and_volume() {
    let rebate =
        Rebate::new("rebate", IncentiveKind::AmountPerUnitOfMeasure).with_amount(Decimal::ONE);
    let product =
        Product::new("product", Decimal::ZERO).supporting(IncentiveKind::AmountPerUnitOfMeasure);

    assert_eq!(evaluate(Some(&rebate), Some(&product), 2), (true, Decimal::TWO));
}

#[test]
fn fixed_rate_rebate_without_product() {
    let rebate =
        Rebate::new("rebate", IncentiveKind::FixedRateRebate).with_percentage(Decimal::ONE);

    assert_eq!(evaluate(Some(&rebate), None, 2), (false, Decimal::ZERO));
}

#[test]
fn missing_rebate_fails_regardless_of_other_inputs() {
    let product = Product {
        supported_incentives: SupportedIncentives::all(),
        ..Product::new("product", Decimal::TWO)
    };

    assert_eq!(evaluate(None, Some(&product), 2), (false, Decimal::ZERO));
    assert_eq!(evaluate(None, None, 0), (false, Decimal::ZERO));
    assert_eq!(evaluate_incentive(None, None, None), Calculation::failed());
}

#[test]
fn failures_never_leak_an_amount() {
    let product = Product::new("product", Decimal::TWO).supporting(IncentiveKind::FixedRateRebate);

    for kind in IncentiveKind::KNOWN {
        let rebate = Rebate::new("rebate", kind)
            .with_amount(Decimal::from(-3))
            .with_percentage(Decimal::ONE);

        for volume in [0, 5] {
            let (success, amount) = evaluate(Some(&rebate), Some(&product), volume);

            if !success {
                assert_eq!(amount, Decimal::ZERO, "{kind} with volume {volume}");
            }
        }
    }
}

#[test]
fn calculators_skip_absent_request_for_volume_rules() {
    let product = Product {
        supported_incentives: SupportedIncentives::all(),
        ..Product::new("product", Decimal::TWO)
    };

    let rate = Rebate::new("rate", IncentiveKind::FixedRateRebate).with_percentage(Decimal::ONE);
    let per_unit = Rebate::new("unit", IncentiveKind::AmountPerUnitOfMeasure).with_amount(Decimal::ONE);
    let cash = Rebate::new("cash", IncentiveKind::FixedCashAmount).with_amount(Decimal::ONE);

    assert!(!evaluate_incentive(Some(&rate), Some(&product), None).is_success());
    assert!(!evaluate_incentive(Some(&per_unit), Some(&product), None).is_success());
    assert_eq!(
        evaluate_incentive(Some(&cash), Some(&product), None),
        Calculation::succeeded(Decimal::ONE)
    );
}

#[test]
fn out_of_range_amounts_fail_instead_of_rounding_or_overflowing() {
    let product = Product {
        supported_incentives: SupportedIncentives::all(),
        ..Product::new("product", Decimal::MAX)
    };

    let rate = Rebate::new("rate", IncentiveKind::FixedRateRebate).with_percentage(Decimal::ONE);
    let per_unit =
        Rebate::new("unit", IncentiveKind::AmountPerUnitOfMeasure).with_amount(Decimal::MAX);

    assert_eq!(evaluate(Some(&rate), Some(&product), 2), (false, Decimal::ZERO));
    assert_eq!(evaluate(Some(&per_unit), Some(&product), 2), (false, Decimal::ZERO));
    assert_eq!(evaluate(Some(&rate), Some(&product), 1), (true, Decimal::MAX));

    let tiny = Rebate::new("unit", IncentiveKind::AmountPerUnitOfMeasure)
        .with_amount(Decimal::new(1, 28));

    assert_eq!(evaluate(Some(&tiny), Some(&product), 1), (true, Decimal::new(1, 28)));
}
