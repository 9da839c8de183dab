//! Rebate Service
//!
//! Resolves the rebate and product for a request, evaluates the incentive and
//! records successful calculations.

use std::sync::Arc;

use mockall::automock;
use rust_decimal::Decimal;
use tracing::{Span, info};

use crate::{
    calculators::Calculation,
    engine::evaluate_incentive,
    identifiers::{ProductIdentifier, RebateIdentifier},
    products::Product,
    rebates::Rebate,
    requests::{CalculateRebateRequest, CalculateRebateResult},
};

/// Source of rebate and product definitions.
#[automock]
pub trait Repository: Send + Sync {
    /// Look up a rebate by identifier.
    fn lookup_rebate(&self, identifier: &RebateIdentifier) -> Option<Rebate>;

    /// Look up a product by identifier.
    fn lookup_product(&self, identifier: &ProductIdentifier) -> Option<Product>;
}

/// Destination for successful calculations.
#[automock]
pub trait ResultSink: Send + Sync {
    /// Record the amount calculated for a rebate.
    fn record_calculation(&self, rebate: &Rebate, amount: Decimal);
}

/// Calculates rebates for requests.
#[derive(Clone)]
pub struct RebateService {
    repository: Arc<dyn Repository>,
    sink: Arc<dyn ResultSink>,
}

impl std::fmt::Debug for RebateService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RebateService").finish_non_exhaustive()
    }
}

impl RebateService {
    /// Create a new service
    #[must_use]
    pub fn new(repository: Arc<dyn Repository>, sink: Arc<dyn ResultSink>) -> Self {
        Self { repository, sink }
    }

    /// Calculate the rebate for a request.
    ///
    /// On success the amount is passed to the result sink exactly once; a
    /// failed calculation records nothing.
    pub fn calculate(&self, request: &CalculateRebateRequest) -> CalculateRebateResult {
        self.calculate_outcome(request).result()
    }

    /// Calculate the rebate for a request, keeping the resolved rebate and
    /// the calculated amount.
    ///
    /// Records to the result sink exactly like [`RebateService::calculate`].
    #[tracing::instrument(
        name = "rebates.service.calculate",
        skip(self, request),
        fields(
            rebate = %request.rebate_identifier,
            product = %request.product_identifier,
            volume = %request.volume,
            success = tracing::field::Empty
        )
    )]
    pub fn calculate_outcome(&self, request: &CalculateRebateRequest) -> CalculationOutcome {
        let rebate = self.repository.lookup_rebate(&request.rebate_identifier);
        let product = self.repository.lookup_product(&request.product_identifier);

        let calculation = evaluate_incentive(rebate.as_ref(), product.as_ref(), Some(request));

        Span::current().record("success", calculation.is_success());

        if calculation.is_success()
            && let Some(rebate) = &rebate
        {
            info!(amount = %calculation.amount(), "calculated rebate");

            self.sink.record_calculation(rebate, calculation.amount());
        }

        CalculationOutcome {
            rebate,
            calculation,
        }
    }
}

/// The rebate a request resolved to, and what was calculated for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOutcome {
    /// Resolved rebate, if the identifier was found
    pub rebate: Option<Rebate>,

    /// Calculation result
    pub calculation: Calculation,
}

impl CalculationOutcome {
    /// The success flag alone
    pub fn result(&self) -> CalculateRebateResult {
        CalculateRebateResult {
            success: self.calculation.is_success(),
        }
    }
}
