//! Vendor offer records consumed by the comparison view
//!
//! An offer set is produced by the analysis backend (or the mock fixtures) and
//! is immutable once loaded: views are derived over it, never written back.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};

/// Delivery and payment conditions attached to an offer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryTerms {
    pub delivery_days: u32,
    /// Free-text payment schedule, e.g. "30 días"
    pub payment: String,
    /// Free-text penalty clause, e.g. "0.1% diario"
    pub penalties: String,
}

/// One vendor's submitted offer as computed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRow {
    /// Display name, unique within one comparison set
    pub vendor: String,
    /// Percentage in `0..=100`
    pub compliance_score: u8,
    pub risk_high: u32,
    pub risk_medium: u32,
    pub risk_low: u32,
    /// Single-currency amount
    pub budget: u64,
    pub terms: DeliveryTerms,
    pub notes: String,
}

impl OfferRow {
    /// Check the invariants the type system cannot express
    pub fn validate(&self) -> SharedResult<()> {
        if self.vendor.trim().is_empty() {
            return Err(SharedError::InvalidOffer {
                vendor: self.vendor.clone(),
                reason: "vendor name is empty".to_string(),
            });
        }
        if self.compliance_score > 100 {
            return Err(SharedError::InvalidOffer {
                vendor: self.vendor.clone(),
                reason: format!("compliance score {} exceeds 100", self.compliance_score),
            });
        }
        Ok(())
    }

    /// Total findings across all severities
    pub fn total_risks(&self) -> u64 {
        u64::from(self.risk_high) + u64::from(self.risk_medium) + u64::from(self.risk_low)
    }
}

/// Validate a whole offer set before it replaces the current one
///
/// Vendor names identify rows for selection, so they must be unique.
pub fn validate_offers(rows: &[OfferRow]) -> SharedResult<()> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        row.validate()?;
        if !seen.insert(row.vendor.as_str()) {
            return Err(SharedError::InvalidOffer {
                vendor: row.vendor.clone(),
                reason: "duplicate vendor in offer set".to_string(),
            });
        }
    }
    Ok(())
}
