//! Responder Rules Engine
//!
//! Evaluates a security alert against an ordered list of response rules,
//! stopping at the first rule that reaches a verdict.
//!
//! Each evaluation:
//! - Increments the processed counter exactly once
//! - Returns the first `MATCH` or `FILTERED` result, or the first rule error
//! - Reports an error when no rule reaches a verdict
//!
//! Rule authoring is left to the caller: anything implementing
//! [`Evaluable`] can take part in a chain.

pub mod builder;
pub mod config;
pub mod engine;
pub mod guard;
pub mod metered;
pub mod rule;

pub use builder::RulesEngineBuilder;
pub use config::{EngineConfig, RulesMetadata};
pub use engine::RulesEngine;
pub use guard::GuardedRule;
pub use metered::MeteredRule;
pub use rule::Evaluable;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::builder::RulesEngineBuilder;
    pub use crate::config::{EngineConfig, RulesMetadata};
    pub use crate::engine::RulesEngine;
    pub use crate::guard::GuardedRule;
    pub use crate::metered::MeteredRule;
    pub use crate::rule::Evaluable;
    pub use responder_core::prelude::*;
    pub use responder_telemetry::prelude::*;
}
