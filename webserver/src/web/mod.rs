//! HTTP layer: route handlers

pub mod handlers;
