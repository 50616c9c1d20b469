//! Engine construction

use responder_core::{Error, Result};
use responder_telemetry::{MetricFactory, MetricNames};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use crate::config::EngineConfig;
use crate::{Evaluable, RulesEngine};

/// Builder for [`RulesEngine`]
///
/// A metric factory and at least one rule are required. Rule order is
/// evaluation order.
#[derive(Default)]
pub struct RulesEngineBuilder {
    config: Option<EngineConfig>,
    metric_factory: Option<Arc<dyn MetricFactory>>,
    rules: Vec<Arc<dyn Evaluable>>,
}

impl RulesEngineBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the factory the engine counters are taken from
    pub fn metric_factory(mut self, metric_factory: impl MetricFactory + 'static) -> Self {
        self.metric_factory = Some(Arc::new(metric_factory));
        self
    }

    /// Replace the rule list
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Evaluable>>,
    {
        self.rules = rules.into_iter().collect();
        self
    }

    /// Append a rule after the ones already added
    pub fn rule(mut self, rule: impl Evaluable + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Set engine name and rule set version
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the engine
    ///
    /// Fails with a configuration error when the metric factory is missing
    /// or no rule was added, and with a rule error when a rule name is empty
    /// or used twice. Per-rule counters are keyed by name.
    pub fn build(self) -> Result<RulesEngine> {
        let metric_factory = self
            .metric_factory
            .ok_or_else(|| Error::config("metric factory is required"))?;

        if self.rules.is_empty() {
            return Err(Error::config("rules engine requires at least one rule"));
        }

        let mut names = HashSet::with_capacity(self.rules.len());
        for (position, rule) in self.rules.iter().enumerate() {
            let name = rule.name();
            if name.trim().is_empty() {
                return Err(Error::rule(format!(
                    "rule at position {} has an empty name",
                    position
                )));
            }
            if !names.insert(name) {
                return Err(Error::rule(format!("duplicate rule name '{}'", name)));
            }
        }

        let config = self.config.unwrap_or_default();

        info!(
            engine = %config.name,
            rules_version = config.rules_version,
            rules = self.rules.len(),
            "Rules engine initialized"
        );

        Ok(RulesEngine {
            processed: metric_factory.counter(MetricNames::EngineProcessedMessages.name()),
            errors: metric_factory.counter(MetricNames::EngineErrorMessages.name()),
            filtered: metric_factory.counter(MetricNames::EngineFilteredMessages.name()),
            metric_factory,
            rules: self.rules,
            config,
        })
    }
}
