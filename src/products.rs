//! Products

use rust_decimal::Decimal;

use crate::{
    identifiers::ProductIdentifier,
    incentives::{IncentiveKind, SupportedIncentives},
};

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub identifier: ProductIdentifier,

    /// Unit price, non-negative
    pub price: Decimal,

    /// Incentive kinds this product accepts
    pub supported_incentives: SupportedIncentives,
}

impl Product {
    /// Create a product with the given price that supports no incentives
    pub fn new(identifier: impl Into<ProductIdentifier>, price: Decimal) -> Self {
        Self {
            identifier: identifier.into(),
            price,
            supported_incentives: SupportedIncentives::empty(),
        }
    }

    /// Add a supported incentive kind
    #[must_use]
    pub fn supporting(mut self, kind: IncentiveKind) -> Self {
        self.supported_incentives.insert(kind);
        self
    }

    /// Returns true if this product accepts the given incentive kind
    pub fn supports(&self, kind: IncentiveKind) -> bool {
        self.supported_incentives.contains(kind)
    }
}
