//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod data_router;
pub mod http_backend;
pub mod mock_data;
pub mod mock_source;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use data_router::DataRouter;
pub use http_backend::HttpBackendClient;
pub use mock_source::MockDataSource;
