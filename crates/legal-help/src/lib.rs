//! Legal help directory: a triage quiz that routes people to the right kind
//! of help, plus the lawyer, legal-aid and resource listings it points at.

pub mod config;
pub mod directory;
pub mod error;
pub mod telemetry;
pub mod triage;
