//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Session Types** - Credential and authentication mode
//! - **Analysis Types** - Service response structures (ResultSet)
//! - **Upload Types** - A file ready to be submitted
//! - **Error Types** - Unified operation failure

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Session Types
// =============================================================================

/// Bearer token identifying an authenticated session.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token returned by the service.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value.
    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Which auth form is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Exchange credentials for a token.
    #[default]
    Login,
    /// Create an account, then log in explicitly.
    Register,
}

impl AuthMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Register => "Create Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Please sign in to continue",
            AuthMode::Register => "Register to start using the app",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Register => "Register",
        }
    }

    /// Prompt and link text for switching to the other mode.
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            AuthMode::Login => ("Don't have an account?", "Register"),
            AuthMode::Register => ("Already have an account?", "Login"),
        }
    }
}

// =============================================================================
// Analysis Types
// =============================================================================

/// Categorical classification of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Chart bucket order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Wire label, also used in CSS class names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Chart label.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Row class for the results table.
    pub fn row_class(&self) -> String {
        format!("sentiment-{}", self.as_str())
    }

    /// Badge class for the sentiment cell.
    pub fn badge_class(&self) -> String {
        format!("sentiment-badge {}", self.as_str())
    }

    /// Bar fill colour.
    pub fn fill_color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "rgba(34, 197, 94, 0.8)",
            Sentiment::Neutral => "rgba(214, 96, 0, 0.8)",
            Sentiment::Negative => "rgba(239, 68, 68, 0.8)",
        }
    }

    /// Bar border colour.
    pub fn border_color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "rgb(34, 197, 94)",
            Sentiment::Neutral => "rgb(214, 96, 0)",
            Sentiment::Negative => "rgb(239, 68, 68)",
        }
    }
}

/// Aggregate counts over the analysed rows, as computed by the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl Statistics {
    /// Count for one bucket.
    pub fn count(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

/// One analysed CSV row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Server-assigned identifier, absent for some services.
    #[serde(default)]
    pub id: Option<i64>,
    pub text: String,
    pub sentiment: Sentiment,
    pub timestamp: String,
}

/// Immutable snapshot of one completed analysis.
///
/// Row order is the server's and is preserved for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    pub statistics: Statistics,
    #[serde(rename = "results")]
    pub rows: Vec<ResultRow>,
}

// =============================================================================
// Upload Types
// =============================================================================

/// A single file submission, bound to the credential current at issue time.
///
/// `F` is the file handle (`web_sys::File` in the browser).
#[derive(Clone, Debug)]
pub struct UploadRequest<F> {
    pub file: F,
    pub file_name: String,
    pub credential: Option<Credential>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Failure category of a service call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Network failure or a request that could not be built.
    Transport,
    /// Non-2xx status from the service.
    ServerRejected,
    /// 2xx status with a body missing expected fields.
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::ServerRejected => write!(f, "server-rejected"),
            FailureKind::MalformedResponse => write!(f, "malformed-response"),
        }
    }
}

/// Unified error for login, registration and analysis calls.
///
/// `detail` is the service's own message; `context` only goes to the logs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} failure: {context}")]
pub struct OperationFailure {
    pub kind: FailureKind,
    pub detail: Option<String>,
    pub context: String,
}

impl OperationFailure {
    pub fn transport(context: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            detail: None,
            context: context.into(),
        }
    }

    pub fn rejected(status: u16, detail: Option<String>) -> Self {
        Self {
            kind: FailureKind::ServerRejected,
            detail,
            context: format!("HTTP {}", status),
        }
    }

    pub fn malformed(context: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::MalformedResponse,
            detail: None,
            context: context.into(),
        }
    }

    /// Message for the ErrorState: the service detail, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.detail.as_deref().map(str::trim) {
            Some(detail) if !detail.is_empty() => detail.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type alias for service operations.
pub type OperationResult<T> = Result<T, OperationFailure>;
