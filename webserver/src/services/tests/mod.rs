//! Service tests for webserver
//!
//! Covers the mock source, the HTTP backend client and the mode router.

pub mod fixtures;
