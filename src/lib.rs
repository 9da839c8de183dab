//! Rebates
//!
//! Rebate calculation for fixed cash, fixed rate and per-unit incentives.
//!
//! [`engine::evaluate_incentive`] is the pure rule evaluation: given a rebate,
//! a product and a request (any of which may be absent) it returns a
//! [`calculators::Calculation`]. [`service::RebateService`] wraps it with
//! identifier lookups and records successful calculations.

pub mod calculators;
pub mod config;
pub mod engine;
pub mod identifiers;
pub mod incentives;
pub mod prelude;
pub mod products;
pub mod rebates;
pub mod report;
pub mod requests;
pub mod service;
pub mod store;
