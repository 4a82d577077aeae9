//! Command implementations

mod audit;

pub use audit::{AuditOptions, audit};
