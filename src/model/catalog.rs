//! Child-product catalog for care-subscription expansion.
//!
//! A care line bills as two derived child products (software and hardware
//! support). Which codes and prices those children carry is configuration,
//! not computed state: the catalog is built once, injected into the pricing
//! transformer, and never mutated afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How a derived child row is priced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChildPricing {
    /// Unit price is whatever remains of the parent's discount price after
    /// the sibling's fixed share is subtracted. Can go negative on
    /// inconsistent input; no clamping.
    ParentRemainder,
    /// Fixed per-unit price, independent of the parent's pricing.
    FixedUnit(f64),
}

/// A billable child product definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildProduct {
    /// Part number of the child row
    pub code: String,

    /// Description carried into the output row
    pub description: String,

    /// Pricing rule for the child row
    pub pricing: ChildPricing,
}

impl ChildProduct {
    /// Create a child product definition.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        pricing: ChildPricing,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            pricing,
        }
    }
}

/// The two child roles of one care tier, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierChildren {
    /// Software subscription child (emitted first)
    pub software: ChildProduct,

    /// Hardware support child (emitted second)
    pub support: ChildProduct,
}

/// Tier-keyed catalog of child product definitions.
///
/// Read-only after construction. Lookups by an unknown tier return `None`,
/// which the transformer degrades to standard single-row emission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChildCatalog {
    tiers: HashMap<String, TierChildren>,
}

impl ChildCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in vendor catalog.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            "HP",
            TierChildren {
                software: ChildProduct::new(
                    "VDP-SW-P-10-HP",
                    "VDURA Software Subscription, Performance",
                    ChildPricing::ParentRemainder,
                ),
                support: ChildProduct::new(
                    "HW-Support-HP-NBD",
                    "Hardware Support, Next Business Day",
                    ChildPricing::FixedUnit(3.0),
                ),
            },
        );
        catalog.insert(
            "C",
            TierChildren {
                software: ChildProduct::new(
                    "VDP-SW-C-10-C",
                    "VDURA Software Subscription, Capacity",
                    ChildPricing::ParentRemainder,
                ),
                support: ChildProduct::new(
                    "HW-Support-C-NBD",
                    "Hardware Support, Next Business Day",
                    ChildPricing::FixedUnit(1.0),
                ),
            },
        );
        catalog
    }

    /// Register the children of a tier (replaces an existing entry).
    pub fn insert(&mut self, tier: impl Into<String>, children: TierChildren) {
        self.tiers.insert(tier.into(), children);
    }

    /// Look up the children of a tier.
    pub fn get(&self, tier: &str) -> Option<&TierChildren> {
        self.tiers.get(tier)
    }

    /// Number of configured tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Check whether the catalog has no tiers.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_hp_tier() {
        let catalog = ChildCatalog::builtin();
        let children = catalog.get("HP").expect("HP tier");
        assert_eq!(children.software.code, "VDP-SW-P-10-HP");
        assert_eq!(children.support.code, "HW-Support-HP-NBD");
        assert_eq!(children.support.pricing, ChildPricing::FixedUnit(3.0));
    }

    #[test]
    fn test_unknown_tier_is_none() {
        let catalog = ChildCatalog::builtin();
        assert!(catalog.get("XX").is_none());
    }

    #[test]
    fn test_insert_overrides() {
        let mut catalog = ChildCatalog::builtin();
        let before = catalog.len();
        catalog.insert(
            "HP",
            TierChildren {
                software: ChildProduct::new("SW-TEST", "test", ChildPricing::ParentRemainder),
                support: ChildProduct::new("SUP-TEST", "test", ChildPricing::FixedUnit(5.0)),
            },
        );
        assert_eq!(catalog.len(), before);
        assert_eq!(catalog.get("HP").unwrap().software.code, "SW-TEST");
    }
}
