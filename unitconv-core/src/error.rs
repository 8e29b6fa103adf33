//! Structured errors for the session and protocol layers
//!
//! Errors never crash the session. They are values with a machine-readable
//! code, a human-readable message, and an optional suggestion.

use crate::NumberError;
use serde::{Deserialize, Serialize};

/// Machine-readable error codes
pub mod codes {
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
    pub const CONVERSION_FAILED: &str = "CONVERSION_FAILED";
    pub const TRANSLATION_UNAVAILABLE: &str = "TRANSLATION_UNAVAILABLE";
    pub const EXPORT_FAILURE: &str = "EXPORT_FAILURE";
    pub const NO_HISTORY: &str = "NO_HISTORY";
    pub const ARG_MISSING: &str = "ARG_MISSING";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const UNKNOWN_TOOL: &str = "UNKNOWN_TOOL";
    pub const NUMERIC: &str = "NUMERIC";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Recovered locally, shown at most as a notice
    Notice,
    /// The user should see it and may retry
    Warning,
    /// The requested action did not happen
    Error,
}

/// Structured error returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UcError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    pub severity: Severity,
}

impl UcError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn invalid_unit(unit: &str, category: &str) -> Self {
        Self::new(codes::INVALID_UNIT, format!("Unit '{}' is not a {} unit", unit, category))
            .with_suggestion("Use list_categories to see the units of each category")
    }

    /// The converter's collapsed failure: no detail beyond the unit pair
    pub fn conversion_failed(message: impl Into<String>) -> Self {
        Self::new(codes::CONVERSION_FAILED, message)
            .with_severity(Severity::Warning)
            .with_suggestion("Check your units")
    }

    pub fn translation_unavailable(details: impl Into<String>) -> Self {
        Self::new(codes::TRANSLATION_UNAVAILABLE,
            format!("Translation unavailable: {}", details.into()))
            .with_severity(Severity::Notice)
    }

    pub fn no_history(message: impl Into<String>) -> Self {
        Self::new(codes::NO_HISTORY, message)
            .with_severity(Severity::Warning)
            .with_suggestion("Convert something first")
    }

    pub fn export_failure(details: impl Into<String>) -> Self {
        Self::new(codes::EXPORT_FAILURE, format!("PDF export failed: {}", details.into()))
            .with_severity(Severity::Warning)
    }

    pub fn arg_missing(tool: &str, arg: &str) -> Self {
        Self::new(codes::ARG_MISSING, format!("{}: missing argument '{}'", tool, arg))
    }

    pub fn arg_type(tool: &str, arg: &str, expected: &str) -> Self {
        Self::new(codes::ARG_TYPE, format!("{}: argument '{}' must be {}", tool, arg, expected))
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::new(codes::UNKNOWN_TOOL, format!("Unknown tool: {}", name))
            .with_suggestion("Use tools/list to see available tools")
    }
}

impl std::fmt::Display for UcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for UcError {}

impl From<NumberError> for UcError {
    fn from(err: NumberError) -> Self {
        Self::new(codes::NUMERIC, err.to_string())
    }
}
