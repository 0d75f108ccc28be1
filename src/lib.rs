//! talentgate: the access policy shell of the recruiting front-end.
//!
//! The decision engine lives in [`talentgate_policy`]. This crate wires it to
//! the outside: the session seam the UI shell implements, and the YAML audit
//! scenarios the `access_check` tool runs in CI.

pub mod audit;
pub mod config;
pub mod session;

pub use audit::{run_audit, AuditMismatch, AuditReport, ScenarioOutcome};
pub use config::{AuditConfig, AuditScenario};
pub use session::{navigate, SessionProvider, StaticSession};
pub use talentgate_policy as policy;
