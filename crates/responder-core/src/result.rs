//! Evaluation results shared by rules and the engine

use serde::Serialize;
use std::fmt;

use crate::types::{Alert, Verdict};

const DEFAULT_ERROR_MESSAGE: &str = "rule evaluation failed";

/// Status of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusCode {
    Ok,
    Error,
}

/// Why an evaluation ended in an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A rule failed or reported that it could not decide
    RuleFailure,

    /// Every rule returned `NO_MATCH`
    NoRuleMatched,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::RuleFailure => f.write_str("rule_failure"),
            ErrorKind::NoRuleMatched => f.write_str("no_rule_matched"),
        }
    }
}

/// Attributes carried by a [`RespondingResult`]
///
/// An OK result always has a verdict and never a message. An ERROR result
/// always has a non-empty message and never a verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    alert: Option<Alert>,

    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Verdict>,

    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<ErrorKind>,
}

impl ResultAttributes {
    /// The evaluated alert, when the result was produced by
    /// `RulesEngine::evaluate_owned` or had it attached with
    /// [`RespondingResult::with_alert`]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// The verdict of an OK result
    pub fn result(&self) -> Option<Verdict> {
        self.result
    }

    /// The description of an ERROR result
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Why an ERROR result failed
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error_kind
    }

    /// Take the alert out of the attributes
    pub fn into_alert(self) -> Option<Alert> {
        self.alert
    }
}

/// Result of evaluating an alert, produced by rules and by the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RespondingResult {
    status_code: StatusCode,
    attributes: ResultAttributes,
}

impl RespondingResult {
    /// Create an OK result carrying a verdict
    pub fn ok(verdict: Verdict) -> Self {
        Self {
            status_code: StatusCode::Ok,
            attributes: ResultAttributes {
                alert: None,
                result: Some(verdict),
                message: None,
                error_kind: None,
            },
        }
    }

    /// Create an ERROR result
    ///
    /// An empty message is replaced with a generic description so that
    /// callers always receive something readable.
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = DEFAULT_ERROR_MESSAGE.to_string();
        }

        Self {
            status_code: StatusCode::Error,
            attributes: ResultAttributes {
                alert: None,
                result: None,
                message: Some(message),
                error_kind: Some(kind),
            },
        }
    }

    /// Create a rule failure from any displayable fault
    pub fn from_error(err: impl fmt::Display) -> Self {
        Self::error(ErrorKind::RuleFailure, err.to_string())
    }

    /// Attach the evaluated alert
    pub fn with_alert(mut self, alert: Alert) -> Self {
        self.attributes.alert = Some(alert);
        self
    }

    /// Get the status code
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Get the result attributes
    pub fn attributes(&self) -> &ResultAttributes {
        &self.attributes
    }

    /// Whether the status is OK
    pub fn is_ok(&self) -> bool {
        self.status_code == StatusCode::Ok
    }

    /// Whether the status is ERROR
    pub fn is_error(&self) -> bool {
        self.status_code == StatusCode::Error
    }

    /// Shorthand for `attributes().result()`
    pub fn verdict(&self) -> Option<Verdict> {
        self.attributes.result
    }

    /// Shorthand for `attributes().message()`
    pub fn message(&self) -> Option<&str> {
        self.attributes.message()
    }

    /// Shorthand for `attributes().error_kind()`
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.attributes.error_kind
    }

    /// Split into status and attributes
    pub fn into_parts(self) -> (StatusCode, ResultAttributes) {
        (self.status_code, self.attributes)
    }
}
