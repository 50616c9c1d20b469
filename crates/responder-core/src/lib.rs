//! Responder Core
//!
//! Core types shared across Responder components.
//!
//! This crate provides:
//! - The alert record evaluated by response rules
//! - Per-rule verdicts and engine-level results
//! - Error types and result handling

pub mod error;
pub mod result;
pub mod types;

pub use error::{Error, Result};
pub use result::{ErrorKind, RespondingResult, ResultAttributes, StatusCode};
pub use types::{Alert, Verdict};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::result::{ErrorKind, RespondingResult, ResultAttributes, StatusCode};
    pub use crate::types::{Alert, Verdict};
}
