//! Closed set of offer field selectors
//!
//! Every field the comparison view can sort or highlight by is named here,
//! together with its accessor. Unknown names are rejected instead of
//! silently reading nothing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::{DeliveryTerms, OfferRow};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::core::comparison::ComparisonError;

/// A field of [`OfferRow`], addressable by its wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OfferField {
    Vendor,
    ComplianceScore,
    RiskHigh,
    RiskMedium,
    RiskLow,
    Budget,
    DeliveryDays,
    Payment,
    Penalties,
    Terms,
    Notes,
}

impl OfferField {
    pub const ALL: [OfferField; 11] = [
        OfferField::Vendor,
        OfferField::ComplianceScore,
        OfferField::RiskHigh,
        OfferField::RiskMedium,
        OfferField::RiskLow,
        OfferField::Budget,
        OfferField::DeliveryDays,
        OfferField::Payment,
        OfferField::Penalties,
        OfferField::Terms,
        OfferField::Notes,
    ];

    /// Wire name as used by the dashboard
    pub fn name(&self) -> &'static str {
        match self {
            OfferField::Vendor => "vendor",
            OfferField::ComplianceScore => "complianceScore",
            OfferField::RiskHigh => "riskHigh",
            OfferField::RiskMedium => "riskMedium",
            OfferField::RiskLow => "riskLow",
            OfferField::Budget => "budget",
            OfferField::DeliveryDays => "terms.deliveryDays",
            OfferField::Payment => "terms.payment",
            OfferField::Penalties => "terms.penalties",
            OfferField::Terms => "terms",
            OfferField::Notes => "notes",
        }
    }

    /// Read this field from a row
    pub fn value(&self, row: &OfferRow) -> FieldValue {
        match self {
            OfferField::Vendor => FieldValue::Text(row.vendor.clone()),
            OfferField::ComplianceScore => FieldValue::Number(i64::from(row.compliance_score)),
            OfferField::RiskHigh => FieldValue::Number(i64::from(row.risk_high)),
            OfferField::RiskMedium => FieldValue::Number(i64::from(row.risk_medium)),
            OfferField::RiskLow => FieldValue::Number(i64::from(row.risk_low)),
            OfferField::Budget => FieldValue::Number(i64::try_from(row.budget).unwrap_or(i64::MAX)),
            OfferField::DeliveryDays => FieldValue::Number(i64::from(row.terms.delivery_days)),
            OfferField::Payment => FieldValue::Text(row.terms.payment.clone()),
            OfferField::Penalties => FieldValue::Text(row.terms.penalties.clone()),
            OfferField::Terms => FieldValue::Structured(row.terms.clone()),
            OfferField::Notes => FieldValue::Text(row.notes.clone()),
        }
    }

    pub fn is_sortable(&self) -> bool {
        !matches!(self, OfferField::Terms)
    }
}

impl fmt::Display for OfferField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OfferField {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OfferField::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| ComparisonError::InvalidSortField { field: s.to_string() })
    }
}

/// Value of one field on one row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Number(i64),
    Text(String),
    Structured(DeliveryTerms),
}

/// A field that has a total order: numeric or text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey(OfferField);

impl SortKey {
    pub fn field(&self) -> OfferField {
        self.0
    }

    /// Ascending comparison of two rows on this key
    pub fn compare(&self, a: &OfferRow, b: &OfferRow) -> Ordering {
        match (self.0.value(a), self.0.value(b)) {
            (FieldValue::Number(x), FieldValue::Number(y)) => x.cmp(&y),
            (FieldValue::Text(x), FieldValue::Text(y)) => locale_compare(&x, &y),
            // Unreachable for a validated key; keep input order
            _ => Ordering::Equal,
        }
    }
}

impl TryFrom<OfferField> for SortKey {
    type Error = ComparisonError;

    fn try_from(field: OfferField) -> Result<Self, Self::Error> {
        if field.is_sortable() {
            Ok(SortKey(field))
        } else {
            Err(ComparisonError::InvalidSortField { field: field.name().to_string() })
        }
    }
}

impl FromStr for SortKey {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::try_from(s.parse::<OfferField>()?)
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey(OfferField::ComplianceScore)
    }
}

/// Primary collation key: accents and case folded away
fn collation_key(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

/// Locale-style text ordering for Latin-script names
///
/// Base letters decide first; accents and case only break ties.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b)).then_with(|| a.cmp(b))
}
