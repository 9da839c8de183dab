//! In-memory data store
//!
//! A [`Repository`] backed by maps, loadable from YAML, and a [`ResultSink`]
//! that keeps every recorded calculation.

use std::{
    fs,
    path::Path,
    sync::{Mutex, PoisonError},
};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    identifiers::{ProductIdentifier, RebateIdentifier},
    incentives::{IncentiveKind, SupportedIncentives},
    products::Product,
    rebates::Rebate,
    service::{Repository, ResultSink},
};

/// Data store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error reading a data file
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A rebate with this identifier is already stored
    #[error("Duplicate rebate: {0}")]
    DuplicateRebate(RebateIdentifier),

    /// A product with this identifier is already stored
    #[error("Duplicate product: {0}")]
    DuplicateProduct(ProductIdentifier),
}

/// Wrapper for rebates and products in YAML
#[derive(Debug, Default, Deserialize)]
struct DataFixture {
    #[serde(default)]
    rebates: FxHashMap<String, RebateFixture>,

    #[serde(default)]
    products: FxHashMap<String, ProductFixture>,
}

/// Rebate fixture from YAML, keyed by identifier
#[derive(Debug, Deserialize)]
struct RebateFixture {
    incentive: IncentiveKind,

    #[serde(default)]
    amount: Decimal,

    #[serde(default)]
    percentage: Decimal,
}

/// Product fixture from YAML, keyed by identifier
#[derive(Debug, Deserialize)]
struct ProductFixture {
    #[serde(default)]
    price: Decimal,

    #[serde(default)]
    supported_incentives: SupportedIncentives,
}

/// Rebates and products held in memory.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    rebates: FxHashMap<RebateIdentifier, Rebate>,
    products: FxHashMap<ProductIdentifier, Product>,
}

impl DataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a YAML data file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let store = Self::from_yaml_str(&contents)?;

        info!(
            path = %path.display(),
            rebates = store.rebates.len(),
            products = store.products.len(),
            "loaded data store"
        );

        Ok(store)
    }

    /// Parse a store from YAML
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml_str(contents: &str) -> Result<Self, StoreError> {
        let fixture: DataFixture = serde_norway::from_str(contents)?;

        let mut store = Self::new();

        for (key, rebate) in fixture.rebates {
            store.insert_rebate(Rebate {
                identifier: RebateIdentifier::from(key),
                incentive: rebate.incentive,
                amount: rebate.amount,
                percentage: rebate.percentage,
            })?;
        }

        for (key, product) in fixture.products {
            store.insert_product(Product {
                identifier: ProductIdentifier::from(key),
                price: product.price,
                supported_incentives: product.supported_incentives,
            })?;
        }

        Ok(store)
    }

    /// Add a rebate
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateRebate`] if the identifier is taken.
    pub fn insert_rebate(&mut self, rebate: Rebate) -> Result<&mut Self, StoreError> {
        if self.rebates.contains_key(&rebate.identifier) {
            return Err(StoreError::DuplicateRebate(rebate.identifier));
        }

        self.rebates.insert(rebate.identifier.clone(), rebate);

        Ok(self)
    }

    /// Add a product
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateProduct`] if the identifier is taken.
    pub fn insert_product(&mut self, product: Product) -> Result<&mut Self, StoreError> {
        if self.products.contains_key(&product.identifier) {
            return Err(StoreError::DuplicateProduct(product.identifier));
        }

        self.products.insert(product.identifier.clone(), product);

        Ok(self)
    }
}

impl Repository for DataStore {
    fn lookup_rebate(&self, identifier: &RebateIdentifier) -> Option<Rebate> {
        let rebate = self.rebates.get(identifier).cloned();

        if rebate.is_none() {
            debug!(rebate = %identifier, "rebate not found");
        }

        rebate
    }

    fn lookup_product(&self, identifier: &ProductIdentifier) -> Option<Product> {
        let product = self.products.get(identifier).cloned();

        if product.is_none() {
            debug!(product = %identifier, "product not found");
        }

        product
    }
}

/// A recorded calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRecord {
    /// Rebate the amount was calculated for
    pub rebate_identifier: RebateIdentifier,

    /// Calculated amount
    pub amount: Decimal,
}

/// Keeps every successful calculation in memory, in order.
#[derive(Debug, Default)]
pub struct CalculationLog {
    records: Mutex<Vec<CalculationRecord>>,
}

impl CalculationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded calculations
    pub fn records(&self) -> Vec<CalculationRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent calculation, if any
    pub fn last(&self) -> Option<CalculationRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl ResultSink for CalculationLog {
    fn record_calculation(&self, rebate: &Rebate, amount: Decimal) {
        info!(rebate = %rebate.identifier, %amount, "recorded calculation");

        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CalculationRecord {
                rebate_identifier: rebate.identifier.clone(),
                amount,
            });
    }
}
