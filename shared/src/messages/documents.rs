//! Classification backend response shapes
//!
//! Field names mirror the backend's JSON exactly; the dashboard only relays
//! these records.

use serde::{Deserialize, Serialize};

use crate::types::AlertSeverity;

/// Taxpayer data and section classification extracted from one PDF
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDocument {
    pub id: i64,
    pub ruc_encontrado: String,
    pub razon_social: String,
    pub estado_contribuyente_ruc: String,
    pub actividad_economica_principal: String,
    pub tipo_contribuyente: String,
    pub regimen: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    pub obligado_llevar_contabilidad: String,
    pub agente_retencion: String,
    pub contribuyente_especial: String,
    pub inicio_actividades: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cese: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reinicio_actividades: Option<String>,
    pub actualizacion: String,
    pub representante_identificacion: String,
    pub representante_nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivo_cancelacion_suspension: Option<String>,
    pub contribuyente_fantasma: String,
    pub transacciones_inexistente: String,
    pub clasificacion_legal: String,
    pub clasificacion_tecnica: String,
    pub clasificacion_economica: String,
    pub texto_pdf_completo: String,
    pub fecha_registro: String,
}

impl ClassifiedDocument {
    /// Whether the taxpayer registry flags the company as a shell or fake-invoice issuer
    pub fn has_registry_flags(&self) -> bool {
        is_affirmative(&self.contribuyente_fantasma) || is_affirmative(&self.transacciones_inexistente)
    }
}

fn is_affirmative(value: &str) -> bool {
    matches!(value.trim().to_uppercase().as_str(), "SI" | "SÍ" | "S" | "YES" | "TRUE")
}

/// Observations may arrive as a single string or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Observations {
    Single(String),
    Many(Vec<String>),
}

impl Observations {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Observations::Single(text) => vec![text.clone()],
            Observations::Many(items) => items.clone(),
        }
    }
}

/// RAG validation verdict for one document type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagValidation {
    pub tipo_documento: String,
    pub resultado_validacion: String,
    pub observaciones: Observations,
    pub semaforo: AlertSeverity,
}

/// Improvement recommendations for a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagAlert {
    pub recomendaciones: String,
    pub semaforo_alerta: AlertSeverity,
}

/// Outcome of building the vector index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexBuildResult {
    #[serde(alias = "mensaje")]
    pub message: String,
    /// Indexed fragments; older backends omit it
    #[serde(default)]
    pub count: u64,
}
