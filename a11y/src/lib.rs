//! Accessibility suite for the accordion.
//!
//! - **Audit**: axe-style rules over the rendered markup, run for every
//!   reachable accordion state
//! - **Screen reader**: a virtual screen reader that speaks the rendered
//!   markup and drives the controller the way a user would
//! - **Report**: text and JSON output for the `a11y-audit` binary

pub mod audit;
pub mod config;
pub mod error;
pub mod finding;
pub mod report;
pub mod screen_reader;

pub use audit::{audit_controller, audit_html, audit_reachable_states, StateAudit};
pub use finding::{AuditReport, Finding, Severity};
pub use screen_reader::VirtualScreenReader;
