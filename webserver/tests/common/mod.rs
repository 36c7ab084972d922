//! Shared helpers for the router integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use shared::{DataMode, DeliveryTerms, OfferRow};
use tower::ServiceExt;

use webserver::{DataRouter, HttpBackendClient, MockDataSource, WebServer, WebServerConfig, WebServerState};

pub fn test_config() -> WebServerConfig {
    WebServerConfig {
        static_dir: std::env::temp_dir().join("tendermind-no-static"),
        ..WebServerConfig::default()
    }
}

/// Router over the demo fixtures in mock mode
pub fn demo_app() -> Router {
    WebServer::from_config(test_config()).unwrap().build_router()
}

/// Router whose comparison uses `offers` and whose live backend is `backend_url`
pub fn app_with(offers: Vec<OfferRow>, mode: DataMode, backend_url: &str) -> Router {
    let config = WebServerConfig {
        initial_mode: mode,
        backend_url: backend_url.to_string(),
        ..test_config()
    };
    let mock = Arc::new(MockDataSource::default().with_offers(offers));
    let live = Arc::new(HttpBackendClient::new(config.backend_url.clone(), config.backend_timeout).unwrap());
    let backend = Arc::new(DataRouter::new(mode, mock.clone(), live));

    WebServer::new(Arc::new(WebServerState::new(config, backend, mock))).build_router()
}

pub fn offer(vendor: &str, compliance_score: u8, budget: u64, delivery_days: u32) -> OfferRow {
    OfferRow {
        vendor: vendor.to_string(),
        compliance_score,
        risk_high: 0,
        risk_medium: 0,
        risk_low: 0,
        budget,
        terms: DeliveryTerms {
            delivery_days,
            payment: "30 días".to_string(),
            penalties: "0.1% diario".to_string(),
        },
        notes: String::new(),
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::post(uri).body(Body::empty()).unwrap()).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::put(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Multipart body with a single file field
pub fn multipart_request(uri: &str, field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let boundary = "tendermind-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n").as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::post(uri)
        .header("content-type", format!("multipart/form-data; boundary={boundary}"))
        .body(Body::from(body))
        .unwrap()
}

pub fn vendors(body: &Value) -> Vec<String> {
    body["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["vendor"].as_str().unwrap().to_string())
        .collect()
}
