//! Route handlers grouped by dashboard area

pub mod api;
pub mod compare;
pub mod runs;
