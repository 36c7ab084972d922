//! Test fixtures for webserver service tests

use shared::{AlertSeverity, DeliveryTerms, IndexBuildResult, OfferRow, RagAlert};

use crate::types::DocumentUpload;

/// Create a valid offer with the given vendor, score and budget
pub fn create_test_offer(vendor: &str, compliance_score: u8, budget: u64) -> OfferRow {
    OfferRow {
        vendor: vendor.to_string(),
        compliance_score,
        risk_high: 0,
        risk_medium: 1,
        risk_low: 2,
        budget,
        terms: DeliveryTerms {
            delivery_days: 60,
            payment: "30 días".to_string(),
            penalties: "0.1% diario".to_string(),
        },
        notes: String::new(),
    }
}

/// Create a small PDF upload
pub fn create_test_upload() -> DocumentUpload {
    let mut upload = DocumentUpload::new("propuesta.pdf", b"%PDF-1.4 test".to_vec());
    upload.content_type = Some("application/pdf".to_string());
    upload
}

pub fn create_test_alert(severity: AlertSeverity) -> RagAlert {
    RagAlert {
        recomendaciones: "Revisar garantías".to_string(),
        semaforo_alerta: severity,
    }
}

pub fn create_test_index_result(count: u64) -> IndexBuildResult {
    IndexBuildResult {
        message: "ok".to_string(),
        count,
    }
}
