//! Rule chain evaluation

use responder_core::{Alert, ErrorKind, RespondingResult, Verdict};
use responder_telemetry::{Counter, MetricFactory};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::builder::RulesEngineBuilder;
use crate::config::{EngineConfig, RulesMetadata};
use crate::Evaluable;

pub(crate) const NO_RULE_MATCHED_MSG: &str = "no rule matched the alert";

/// Evaluates alerts against an ordered list of response rules
///
/// Rules are consulted in order and the first one to reach a decisive
/// verdict wins:
/// - `MATCH` ends evaluation with an OK result
/// - `FILTERED` ends evaluation with an OK result and bumps the filtered counter
/// - `NO_MATCH` moves on to the next rule
/// - an ERROR result ends evaluation and is returned as is
///
/// Running out of rules without a decisive verdict is an error: every alert
/// must leave the engine with an explicit disposition.
///
/// The engine is immutable once built and can be shared between threads.
pub struct RulesEngine {
    pub(crate) config: EngineConfig,
    pub(crate) rules: Vec<Arc<dyn Evaluable>>,
    pub(crate) metric_factory: Arc<dyn MetricFactory>,
    pub(crate) processed: Arc<dyn Counter>,
    pub(crate) errors: Arc<dyn Counter>,
    pub(crate) filtered: Arc<dyn Counter>,
}

impl RulesEngine {
    /// Start building an engine
    pub fn builder() -> RulesEngineBuilder {
        RulesEngineBuilder::new()
    }

    /// Evaluate an alert against the rule chain
    ///
    /// Rules enrich the alert in place, so the caller sees every change
    /// and still holds the alert whatever the outcome.
    pub fn evaluate(&self, alert: &mut Alert) -> RespondingResult {
        self.processed.increment();

        for rule in &self.rules {
            let result = rule.evaluate(alert);

            if result.is_error() {
                warn!(
                    engine = %self.config.name,
                    rule = %rule.name(),
                    error = %result.message().unwrap_or_default(),
                    "Rule evaluation failed"
                );
                self.errors.increment();
                return result;
            }

            match result.verdict() {
                Some(Verdict::Match) => {
                    debug!(engine = %self.config.name, rule = %rule.name(), "Rule matched alert");
                    return result;
                }
                Some(Verdict::Filtered) => {
                    debug!(engine = %self.config.name, rule = %rule.name(), "Rule filtered alert");
                    self.filtered.increment();
                    return result;
                }
                Some(Verdict::NoMatch) | None => {}
            }
        }

        warn!(
            engine = %self.config.name,
            rules = self.rules.len(),
            "No rule matched the alert"
        );
        self.errors.increment();
        RespondingResult::error(ErrorKind::NoRuleMatched, NO_RULE_MATCHED_MSG)
    }

    /// Evaluate an owned alert and return it inside the result
    ///
    /// The alert is attached on every outcome, errors included.
    pub fn evaluate_owned(&self, mut alert: Alert) -> RespondingResult {
        self.evaluate(&mut alert).with_alert(alert)
    }

    /// Name, rule set version and rule count of this engine
    pub fn metadata(&self) -> RulesMetadata {
        RulesMetadata {
            name: self.config.name.clone(),
            rules_version: self.config.rules_version,
            rules_count: self.rules.len(),
        }
    }

    /// Number of rules in the chain
    pub fn rules_count(&self) -> usize {
        self.rules.len()
    }

    /// Names of the rules in evaluation order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// The factory the engine counters come from
    pub fn metric_factory(&self) -> &dyn MetricFactory {
        self.metric_factory.as_ref()
    }
}

impl std::fmt::Debug for RulesEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RulesEngine")
            .field("config", &self.config)
            .field("rules", &self.rule_names())
            .finish()
    }
}
