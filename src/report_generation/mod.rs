//! Report generation bounded context: domain aggregates and the pure
//! rendering services that turn them into report text.

pub mod domain;
pub mod services;
