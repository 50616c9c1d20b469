//! Conversion of rule panics into error results

use responder_core::{Alert, ErrorKind, RespondingResult};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::error;

use crate::Evaluable;

/// Wraps a rule so that a panic during evaluation becomes an ERROR result
///
/// The caller keeps the alert when the inner rule panics, including any
/// fields the rule added before it failed.
///
/// Panics can only be caught when the final binary is built with
/// `panic = "unwind"` (the default). Under `panic = "abort"` the process
/// still aborts and this wrapper has no effect.
pub struct GuardedRule<R> {
    inner: R,
}

impl<R: Evaluable> GuardedRule<R> {
    /// Guard a rule
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap the guarded rule
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Evaluable> Evaluable for GuardedRule<R> {
    fn evaluate(&self, alert: &mut Alert) -> RespondingResult {
        // Rules are shared immutably; only the alert may be left part-enriched.
        match panic::catch_unwind(AssertUnwindSafe(|| self.inner.evaluate(alert))) {
            Ok(result) => result,
            Err(payload) => {
                let reason = panic_reason(payload.as_ref());
                error!(
                    rule = %self.inner.name(),
                    reason = %reason,
                    "Rule panicked during evaluation"
                );
                RespondingResult::error(
                    ErrorKind::RuleFailure,
                    format!("rule '{}' panicked: {}", self.inner.name(), reason),
                )
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
