//! Demo data served in mock mode

use std::collections::HashMap;

use shared::{
    ActivityPoint, Alert, AlertReference, AlertSeverity, AnalysisStep, ClassifiedDocument, DeliveryTerms,
    IndexBuildResult, KpiData, LogEntry, LogLevel, Observations, OfferRow, RagAlert, RagValidation, ResultSections,
    Run, RunFile, RunResults, RunStatus, SectionType,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn runs() -> Vec<Run> {
    let file = |id: &str, name: &str, size: u64| RunFile {
        id: id.to_string(),
        name: name.to_string(),
        size,
    };

    vec![
        Run {
            id: "run-001".to_string(),
            created_at: "2024-01-15T10:30:00Z".to_string(),
            status: RunStatus::Completed,
            progress_percent: 100,
            current_step: None,
            files: vec![
                file("file-001", "propuesta-empresa-a.pdf", 2_048_576),
                file("file-002", "documentos-legales.pdf", 1_536_000),
            ],
        },
        Run {
            id: "run-002".to_string(),
            created_at: "2024-01-14T14:20:00Z".to_string(),
            status: RunStatus::Failed,
            progress_percent: 45,
            current_step: Some(AnalysisStep::Validate),
            files: vec![file("file-003", "oferta-tecnica.pdf", 3_072_000)],
        },
        Run {
            id: "run-003".to_string(),
            created_at: "2024-01-14T09:15:00Z".to_string(),
            status: RunStatus::Running,
            progress_percent: 75,
            current_step: Some(AnalysisStep::Analyze),
            files: vec![file("file-004", "propuesta-completa.pdf", 4_096_000)],
        },
    ]
}

pub fn logs() -> HashMap<String, Vec<LogEntry>> {
    let entry = |ts: &str, step: AnalysisStep, level: LogLevel, message: &str| LogEntry {
        ts: ts.to_string(),
        step,
        level,
        message: message.to_string(),
    };

    let run_001 = vec![
        entry("2024-01-15T10:30:05Z", AnalysisStep::Extract, LogLevel::Info, "Iniciando extracción de texto del PDF"),
        entry(
            "2024-01-15T10:30:12Z",
            AnalysisStep::Extract,
            LogLevel::Info,
            "Texto extraído correctamente: 1,245 palabras",
        ),
        entry("2024-01-15T10:30:15Z", AnalysisStep::Classify, LogLevel::Info, "Clasificando secciones del documento"),
        entry(
            "2024-01-15T10:30:28Z",
            AnalysisStep::Classify,
            LogLevel::Info,
            "Secciones identificadas: Legal, Técnica, Económica",
        ),
        entry("2024-01-15T10:30:30Z", AnalysisStep::Index, LogLevel::Info, "Creando índice vectorial"),
        entry("2024-01-15T10:30:45Z", AnalysisStep::Validate, LogLevel::Info, "Validando contra base de conocimiento"),
        entry("2024-01-15T10:30:52Z", AnalysisStep::Validate, LogLevel::Warn, "Detectada inconsistencia en términos de pago"),
        entry("2024-01-15T10:31:00Z", AnalysisStep::Analyze, LogLevel::Info, "Análisis completado exitosamente"),
    ];

    HashMap::from([("run-001".to_string(), run_001)])
}

pub fn results() -> HashMap<String, RunResults> {
    let results = RunResults {
        run_id: "run-001".to_string(),
        sections: ResultSections {
            legal: strings(&[
                "Cumplimiento de requisitos legales básicos",
                "Documentación societaria completa",
                "Certificados vigentes de no estar en listas restrictivas",
                "Pólizas de seguro según especificaciones",
            ]),
            technical: strings(&[
                "Propuesta técnica alineada con términos de referencia",
                "Metodología clara y detallada",
                "Cronograma realista de implementación",
                "Equipo técnico con experiencia comprobada",
            ]),
            economic: strings(&[
                "Presupuesto dentro del rango esperado",
                "Desglose detallado de costos",
                "Términos de pago estándar",
                "Garantías económicas apropiadas",
            ]),
        },
        alerts: vec![
            Alert {
                id: "alert-001".to_string(),
                title: "Inconsistencia en términos de pago".to_string(),
                severity: AlertSeverity::Medium,
                category: SectionType::Economic,
                description: "Los términos de pago mencionados en la sección económica no coinciden con los del anexo legal."
                    .to_string(),
                references: Some(AlertReference {
                    doc_id: "file-001".to_string(),
                    page: 15,
                    fragment: "Términos de pago: 30 días...".to_string(),
                }),
            },
            Alert {
                id: "alert-002".to_string(),
                title: "Certificado próximo a vencer".to_string(),
                severity: AlertSeverity::Low,
                category: SectionType::Legal,
                description: "El certificado de no estar en centrales de riesgo vence en 45 días.".to_string(),
                references: Some(AlertReference {
                    doc_id: "file-002".to_string(),
                    page: 3,
                    fragment: "Válido hasta: 28/02/2024".to_string(),
                }),
            },
        ],
        summary: "Propuesta técnicamente sólida con documentación legal completa. Se identificaron alertas menores que requieren aclaración."
            .to_string(),
    };

    HashMap::from([(results.run_id.clone(), results)])
}

pub fn offers() -> Vec<OfferRow> {
    let terms = |delivery_days: u32, payment: &str, penalties: &str| DeliveryTerms {
        delivery_days,
        payment: payment.to_string(),
        penalties: penalties.to_string(),
    };

    vec![
        OfferRow {
            vendor: "Empresa A S.A.".to_string(),
            compliance_score: 95,
            risk_high: 0,
            risk_medium: 2,
            risk_low: 1,
            budget: 150_000,
            terms: terms(90, "30 días", "0.1% diario"),
            notes: "Propuesta sólida con experiencia comprobada".to_string(),
        },
        OfferRow {
            vendor: "Consultora B Ltda.".to_string(),
            compliance_score: 87,
            risk_high: 1,
            risk_medium: 1,
            risk_low: 3,
            budget: 135_000,
            terms: terms(120, "45 días", "0.05% diario"),
            notes: "Precio competitivo, mayor tiempo de entrega".to_string(),
        },
        OfferRow {
            vendor: "Soluciones C Corp.".to_string(),
            compliance_score: 78,
            risk_high: 2,
            risk_medium: 3,
            risk_low: 2,
            budget: 125_000,
            terms: terms(75, "60 días", "0.2% diario"),
            notes: "Menor precio pero mayor riesgo identificado".to_string(),
        },
    ]
}

pub fn kpis() -> KpiData {
    let recent_activity = [
        ("2024-01-15", 3),
        ("2024-01-14", 5),
        ("2024-01-13", 2),
        ("2024-01-12", 4),
        ("2024-01-11", 1),
        ("2024-01-10", 6),
        ("2024-01-09", 3),
    ]
    .into_iter()
    .map(|(date, count)| ActivityPoint { date: date.to_string(), count })
    .collect();

    KpiData {
        total_runs: 24,
        high_alert_percentage: 12.5,
        average_time: 4.2,
        recent_activity,
    }
}

pub fn classified_document() -> ClassifiedDocument {
    ClassifiedDocument {
        id: 1,
        ruc_encontrado: "1234567890001".to_string(),
        razon_social: "EMPRESA DEMO S.A.".to_string(),
        estado_contribuyente_ruc: "ACTIVO".to_string(),
        actividad_economica_principal: "Consultoría en tecnología".to_string(),
        tipo_contribuyente: "SOCIEDADES".to_string(),
        regimen: "GENERAL".to_string(),
        categoria: Some("GRANDE".to_string()),
        obligado_llevar_contabilidad: "SI".to_string(),
        agente_retencion: "NO".to_string(),
        contribuyente_especial: "NO".to_string(),
        inicio_actividades: "2020-03-15".to_string(),
        cese: None,
        reinicio_actividades: None,
        actualizacion: "2024-01-10".to_string(),
        representante_identificacion: "0987654321".to_string(),
        representante_nombre: "Juan Pérez García".to_string(),
        motivo_cancelacion_suspension: None,
        contribuyente_fantasma: "NO".to_string(),
        transacciones_inexistente: "NO".to_string(),
        clasificacion_legal: "Documentación legal completa. Cumple con requisitos básicos de habilitación. Certificados vigentes."
            .to_string(),
        clasificacion_tecnica: "Propuesta técnica detallada. Metodología clara. Equipo calificado con experiencia relevante."
            .to_string(),
        clasificacion_economica: "Presupuesto competitivo. Desglose detallado de costos. Términos de pago estándar."
            .to_string(),
        texto_pdf_completo: "Contenido completo del PDF...".to_string(),
        fecha_registro: "2024-01-15T10:30:00Z".to_string(),
    }
}

pub fn validations() -> Vec<RagValidation> {
    vec![RagValidation {
        tipo_documento: "propuesta".to_string(),
        resultado_validacion: "Validación exitosa".to_string(),
        observaciones: Observations::Many(strings(&["Cumple con términos de referencia", "Documentación completa"])),
        semaforo: AlertSeverity::Low,
    }]
}

pub fn alerts() -> RagAlert {
    RagAlert {
        recomendaciones:
            "• Verificar vigencia de certificados\n• Aclarar términos de pago\n• Confirmar disponibilidad del equipo técnico"
                .to_string(),
        semaforo_alerta: AlertSeverity::Medium,
    }
}

pub fn index_build() -> IndexBuildResult {
    IndexBuildResult {
        message: "Índice RAG creado exitosamente".to_string(),
        count: 150,
    }
}
