//! HTTP handlers.

pub mod callback;
pub mod extractors;
