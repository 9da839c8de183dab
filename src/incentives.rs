//! Incentives
//!
//! The incentive kinds a rebate can be defined with, and the set of kinds a
//! product accepts.

use std::fmt;

use serde::Deserialize;

/// The rule family governing how a rebate amount is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveKind {
    /// A fixed amount of cash, regardless of volume.
    FixedCashAmount,

    /// A percentage of the product price, multiplied by volume.
    FixedRateRebate,

    /// A fixed amount for every unit of volume.
    #[serde(alias = "amount_per_uom")]
    AmountPerUnitOfMeasure,

    /// A kind named by stored data that this build does not know.
    ///
    /// Never eligible and never calculated.
    #[serde(other)]
    Unrecognized,
}

impl IncentiveKind {
    /// Every kind that has a calculation rule.
    pub const KNOWN: [IncentiveKind; 3] = [
        IncentiveKind::FixedCashAmount,
        IncentiveKind::FixedRateRebate,
        IncentiveKind::AmountPerUnitOfMeasure,
    ];

    /// Bit used for this kind in a [`SupportedIncentives`] set.
    const fn flag(self) -> Option<u8> {
        match self {
            IncentiveKind::FixedCashAmount => Some(1),
            IncentiveKind::FixedRateRebate => Some(1 << 1),
            IncentiveKind::AmountPerUnitOfMeasure => Some(1 << 2),
            IncentiveKind::Unrecognized => None,
        }
    }

    /// Snake case name, as used in data files.
    pub const fn as_str(self) -> &'static str {
        match self {
            IncentiveKind::FixedCashAmount => "fixed_cash_amount",
            IncentiveKind::FixedRateRebate => "fixed_rate_rebate",
            IncentiveKind::AmountPerUnitOfMeasure => "amount_per_unit_of_measure",
            IncentiveKind::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for IncentiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of incentive kinds a product accepts.
///
/// A product may support none, one or several kinds at once.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Vec<IncentiveKind>")]
pub struct SupportedIncentives {
    bits: u8,
}

impl SupportedIncentives {
    /// Create an empty set
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Create a set containing every known kind
    #[must_use]
    pub fn all() -> Self {
        Self::from_iter(IncentiveKind::KNOWN)
    }

    /// Returns a copy of this set with `kind` added.
    #[must_use]
    pub const fn with(mut self, kind: IncentiveKind) -> Self {
        if let Some(flag) = kind.flag() {
            self.bits |= flag;
        }

        self
    }

    /// Adds `kind` to the set. Unrecognized kinds are ignored.
    pub fn insert(&mut self, kind: IncentiveKind) {
        *self = self.with(kind);
    }

    /// Returns true if `kind` is in the set.
    pub const fn contains(&self, kind: IncentiveKind) -> bool {
        match kind.flag() {
            Some(flag) => self.bits & flag == flag,
            None => false,
        }
    }

    /// Returns true if the set contains no kinds.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over the kinds in the set
    pub fn kinds(&self) -> impl Iterator<Item = IncentiveKind> {
        let set = *self;

        IncentiveKind::KNOWN
            .into_iter()
            .filter(move |kind| set.contains(*kind))
    }
}

impl fmt::Debug for SupportedIncentives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

impl FromIterator<IncentiveKind> for SupportedIncentives {
    fn from_iter<I: IntoIterator<Item = IncentiveKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set.with(kind))
    }
}

impl From<IncentiveKind> for SupportedIncentives {
    fn from(kind: IncentiveKind) -> Self {
        Self::empty().with(kind)
    }
}

impl From<Vec<IncentiveKind>> for SupportedIncentives {
    fn from(kinds: Vec<IncentiveKind>) -> Self {
        kinds.into_iter().collect()
    }
}
