//! Stub rules for testing
//!
//! Hand-written implementations of `Evaluable` returning fixed results,
//! with call counting and a shared log of evaluation order.

#![allow(dead_code)]

use responder_core::{Alert, ErrorKind, RespondingResult, Verdict};
use responder_engine::{Evaluable, RulesEngine};
use responder_telemetry::{InMemoryMetricFactory, MetricNames};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Shared record of which rules ran, in order
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// What a stub rule does when evaluated
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Return an OK result with this verdict
    Verdict(Verdict),
    /// Return an ERROR result with this message
    Error(String),
    /// Panic with this message
    Panic(String),
}

/// A configurable stub rule
pub struct StubRule {
    name: String,
    behavior: Behavior,
    enrich: Option<(String, String)>,
    call_count: AtomicU32,
    log: Option<CallLog>,
}

impl StubRule {
    /// Create a stub that returns the given verdict
    pub fn new(name: &str, verdict: Verdict) -> Self {
        Self::with_behavior(name, Behavior::Verdict(verdict))
    }

    /// Create a stub that reports an error
    pub fn failing(name: &str, message: &str) -> Self {
        Self::with_behavior(name, Behavior::Error(message.to_string()))
    }

    /// Create a stub that panics
    pub fn panicking(name: &str, message: &str) -> Self {
        Self::with_behavior(name, Behavior::Panic(message.to_string()))
    }

    /// Create a stub with any behavior
    pub fn with_behavior(name: &str, behavior: Behavior) -> Self {
        Self {
            name: name.to_string(),
            behavior,
            enrich: None,
            call_count: AtomicU32::new(0),
            log: None,
        }
    }

    /// Add a field to every alert this rule sees
    pub fn with_enrichment(mut self, field: &str, value: &str) -> Self {
        self.enrich = Some((field.to_string(), value.to_string()));
        self
    }

    /// Record calls in a shared log
    pub fn with_log(mut self, log: &CallLog) -> Self {
        self.log = Some(Arc::clone(log));
        self
    }

    /// Get the number of times evaluate was called
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Evaluable for StubRule {
    fn evaluate(&self, alert: &mut Alert) -> RespondingResult {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(log) = &self.log {
            log.lock().unwrap().push(self.name.clone());
        }

        if let Some((field, value)) = &self.enrich {
            alert.insert(field.clone(), value.clone());
        }

        match &self.behavior {
            Behavior::Verdict(verdict) => RespondingResult::ok(*verdict),
            Behavior::Error(message) => RespondingResult::error(ErrorKind::RuleFailure, message.clone()),
            Behavior::Panic(message) => panic!("{}", message),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// The alert used across tests
pub fn test_alert() -> Alert {
    let mut alert = Alert::new();
    alert.insert("field1", "VALUE1");
    alert.insert("field2", "VALUE2");
    alert
}

/// Route engine logs to the test output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("responder_engine=debug")
        .with_test_writer()
        .try_init();
}

/// Build an engine over shared stub rules
pub fn build_engine(rules: &[Arc<StubRule>], factory: &InMemoryMetricFactory) -> RulesEngine {
    init_tracing();
    RulesEngine::builder()
        .metric_factory(factory.clone())
        .rules(rules.iter().map(|r| Arc::clone(r) as Arc<dyn Evaluable>))
        .build()
        .expect("engine should build")
}

/// Engine counter values as (processed, error, filtered)
pub fn engine_counters(factory: &InMemoryMetricFactory) -> (u64, u64, u64) {
    (
        factory.value(MetricNames::EngineProcessedMessages.name()),
        factory.value(MetricNames::EngineErrorMessages.name()),
        factory.value(MetricNames::EngineFilteredMessages.name()),
    )
}
