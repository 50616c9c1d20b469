//! The rule capability evaluated by the engine

use responder_core::{Alert, RespondingResult};
use std::sync::Arc;

/// A response rule
///
/// Rules are built once when configuration is loaded and then evaluated
/// against many alerts, possibly from several threads at once.
///
/// The alert stays owned by the caller. A rule may read it and enrich it in
/// place; enrichments are visible to later rules and to the caller. A rule
/// that hits an internal fault must report it as an ERROR result (see
/// [`RespondingResult::from_error`]) rather than panic; wrap untrusted rules
/// in [`GuardedRule`](crate::GuardedRule) to enforce this.
pub trait Evaluable: Send + Sync {
    /// Evaluate the alert
    fn evaluate(&self, alert: &mut Alert) -> RespondingResult;

    /// Get the rule name
    fn name(&self) -> &str;
}

impl<T: Evaluable + ?Sized> Evaluable for Arc<T> {
    fn evaluate(&self, alert: &mut Alert) -> RespondingResult {
        (**self).evaluate(alert)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Evaluable + ?Sized> Evaluable for Box<T> {
    fn evaluate(&self, alert: &mut Alert) -> RespondingResult {
        (**self).evaluate(alert)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
