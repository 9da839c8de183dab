//! Rebates prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    calculators::{Calculation, Calculator, calculator_for, eligible_product},
    engine::evaluate_incentive,
    identifiers::{ProductIdentifier, RebateIdentifier},
    incentives::{IncentiveKind, SupportedIncentives},
    products::Product,
    rebates::Rebate,
    report::{CalculationReport, ReportError},
    requests::{CalculateRebateRequest, CalculateRebateResult},
    service::{CalculationOutcome, RebateService, Repository, ResultSink},
    store::{CalculationLog, CalculationRecord, DataStore, StoreError},
};
