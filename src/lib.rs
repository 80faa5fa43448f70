pub use crate::diagnostics::{AuditError, AuditResult};

pub mod cli;
pub mod diagnostics;
pub mod ignore;
pub mod report;
pub mod suite;
