//! Registry of counter names used by the engine and rule adapters

use std::fmt;

/// Well-known counter names
///
/// Engine counters are fixed names. Rule counters are prefixes completed
/// with the rule name through [`MetricNames::name_with_suffix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricNames {
    /// Alerts submitted to the engine
    EngineProcessedMessages,
    /// Alerts that ended in an ERROR result
    EngineErrorMessages,
    /// Alerts a rule filtered out
    EngineFilteredMessages,
    /// Matches produced by one rule
    RuleMatches,
    /// Alerts filtered by one rule
    RuleFilteredAlerts,
    /// Errors reported by one rule
    RuleErrorMessages,
}

impl MetricNames {
    /// Engine-level counters, all of which are created when an engine is built
    pub const ENGINE: [MetricNames; 3] = [
        MetricNames::EngineProcessedMessages,
        MetricNames::EngineErrorMessages,
        MetricNames::EngineFilteredMessages,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MetricNames::EngineProcessedMessages => "engine_processed_messages",
            MetricNames::EngineErrorMessages => "engine_error_messages",
            MetricNames::EngineFilteredMessages => "engine_filtered_messages",
            MetricNames::RuleMatches => "rule_matches_",
            MetricNames::RuleFilteredAlerts => "rule_filtered_alerts_",
            MetricNames::RuleErrorMessages => "rule_error_messages_",
        }
    }

    /// Name completed with a suffix, e.g. `rule_matches_block_host`
    pub fn name_with_suffix(self, suffix: &str) -> String {
        format!("{}{}", self.name(), suffix)
    }

    /// Human readable description, used when registering with an exporter
    pub fn description(self) -> &'static str {
        match self {
            MetricNames::EngineProcessedMessages => "Total number of alerts evaluated by the engine",
            MetricNames::EngineErrorMessages => "Total number of alerts that ended in an error",
            MetricNames::EngineFilteredMessages => "Total number of alerts filtered by a rule",
            MetricNames::RuleMatches => "Number of alerts matched by the rule",
            MetricNames::RuleFilteredAlerts => "Number of alerts filtered by the rule",
            MetricNames::RuleErrorMessages => "Number of errors reported by the rule",
        }
    }
}

impl fmt::Display for MetricNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
