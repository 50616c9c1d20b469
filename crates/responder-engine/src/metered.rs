//! Per-rule counters

use responder_core::{Alert, RespondingResult, Verdict};
use responder_telemetry::{Counter, MetricFactory, MetricNames};
use std::sync::Arc;

use crate::Evaluable;

/// Wraps a rule and counts its matches, filtered alerts and errors
///
/// Counters are named after the rule, e.g. `rule_matches_<name>`, and are
/// created once when the wrapper is built.
pub struct MeteredRule<R> {
    inner: R,
    matches: Arc<dyn Counter>,
    filtered: Arc<dyn Counter>,
    errors: Arc<dyn Counter>,
}

impl<R: Evaluable> MeteredRule<R> {
    /// Wrap a rule, resolving its counters from `metric_factory`
    pub fn new(inner: R, metric_factory: &dyn MetricFactory) -> Self {
        let name = inner.name().to_string();
        Self {
            matches: metric_factory.counter(&MetricNames::RuleMatches.name_with_suffix(&name)),
            filtered: metric_factory
                .counter(&MetricNames::RuleFilteredAlerts.name_with_suffix(&name)),
            errors: metric_factory.counter(&MetricNames::RuleErrorMessages.name_with_suffix(&name)),
            inner,
        }
    }
}

impl<R: Evaluable> Evaluable for MeteredRule<R> {
    fn evaluate(&self, alert: &mut Alert) -> RespondingResult {
        let result = self.inner.evaluate(alert);

        if result.is_error() {
            self.errors.increment();
        } else {
            match result.verdict() {
                Some(Verdict::Match) => self.matches.increment(),
                Some(Verdict::Filtered) => self.filtered.increment(),
                Some(Verdict::NoMatch) | None => {}
            }
        }

        result
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
