//! Presentation helpers shared by the comparison and run views

use serde::{Deserialize, Serialize};
use shared::OfferRow;

/// Render a whole-dollar amount the way the dashboard's es-ES locale does
///
/// Thousands are grouped with `.` only from five integer digits upward.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let grouped = if digits.len() >= 5 {
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(ch);
        }
        out
    } else {
        digits
    };

    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{grouped} US$")
}

/// Human-readable byte size for uploaded files
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Coarse grade of a compliance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceBand {
    High,
    Medium,
    Low,
}

impl ComplianceBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ComplianceBand::High,
            75..=89 => ComplianceBand::Medium,
            _ => ComplianceBand::Low,
        }
    }
}

/// Non-zero risk counts of one offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<u32>,
    /// True when the offer has no findings at all
    pub none: bool,
}

impl RiskSummary {
    pub fn of(row: &OfferRow) -> Self {
        let non_zero = |count: u32| (count > 0).then_some(count);
        Self {
            high: non_zero(row.risk_high),
            medium: non_zero(row.risk_medium),
            low: non_zero(row.risk_low),
            none: row.total_risks() == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DeliveryTerms;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(136_667), "136.667 US$");
        assert_eq!(format_currency(1_250_000), "1.250.000 US$");
        assert_eq!(format_currency(10_000), "10.000 US$");
        assert_eq!(format_currency(5_000), "5000 US$");
        assert_eq!(format_currency(0), "0 US$");
        assert_eq!(format_currency(-25_000), "-25.000 US$");
    }

    #[test]
    fn test_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2_048_576), "2.0 MB");
        assert_eq!(format_file_size(1_536_000), "1.5 MB");
    }

    #[test]
    fn test_compliance_bands() {
        assert_eq!(ComplianceBand::from_score(100), ComplianceBand::High);
        assert_eq!(ComplianceBand::from_score(90), ComplianceBand::High);
        assert_eq!(ComplianceBand::from_score(89), ComplianceBand::Medium);
        assert_eq!(ComplianceBand::from_score(75), ComplianceBand::Medium);
        assert_eq!(ComplianceBand::from_score(74), ComplianceBand::Low);
        assert_eq!(ComplianceBand::from_score(0), ComplianceBand::Low);
    }

    #[test]
    fn test_risk_summary() {
        let mut row = OfferRow {
            vendor: "A".to_string(),
            compliance_score: 80,
            risk_high: 0,
            risk_medium: 2,
            risk_low: 0,
            budget: 1,
            terms: DeliveryTerms { delivery_days: 1, payment: String::new(), penalties: String::new() },
            notes: String::new(),
        };
        let summary = RiskSummary::of(&row);
        assert_eq!(summary.high, None);
        assert_eq!(summary.medium, Some(2));
        assert!(!summary.none);

        row.risk_medium = 0;
        assert!(RiskSummary::of(&row).none);
    }

    #[test]
    fn test_risk_summary_with_maximal_counts() {
        let row = OfferRow {
            vendor: "A".to_string(),
            compliance_score: 80,
            risk_high: u32::MAX,
            risk_medium: 1,
            risk_low: 0,
            budget: 1,
            terms: DeliveryTerms { delivery_days: 1, payment: String::new(), penalties: String::new() },
            notes: String::new(),
        };
        let summary = RiskSummary::of(&row);
        assert_eq!(summary.high, Some(u32::MAX));
        assert_eq!(summary.medium, Some(1));
        assert!(!summary.none);
    }
}
