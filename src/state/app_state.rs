//! Application state definitions

use serde::{Deserialize, Serialize};

use super::forms::ModelForm;

/// Complexity level forwarded to the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

impl Complexity {
    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

}

/// Which of the two service operations produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Generate,
    Modify,
}

impl RequestKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Generate => "Generate Model",
            Self::Modify => "Modify Model",
        }
    }

    pub fn result_title(&self) -> &'static str {
        match self {
            Self::Generate => "Generated Model",
            Self::Modify => "Modified Model",
        }
    }

    /// User-facing hint shown when the service rejects the shape description
    pub fn domain_hint(&self) -> &'static str {
        match self {
            Self::Generate => "Shape not recognized. Please describe a valid shape.",
            Self::Modify => "Shape not recognized. Try modifying a valid model.",
        }
    }

    /// Prefix for transport-level failure messages
    pub fn transport_prefix(&self) -> &'static str {
        match self {
            Self::Generate => "Error generating model: ",
            Self::Modify => "Error modifying model: ",
        }
    }
}

/// Outcome of the most recent submission, replaced wholesale on every
/// submit and every applied response
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OperationResult {
    #[default]
    Idle,
    Loading,
    Success {
        kind: RequestKind,
        file_ref: String,
    },
    DomainError {
        message: String,
    },
    TransportError {
        message: String,
    },
}

impl OperationResult {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Message text when the result is either error kind
    #[allow(dead_code)]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::DomainError { message } | Self::TransportError { message } => Some(message),
            _ => None,
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    /// Form field values; persist across requests
    pub form: ModelForm,
    /// Result of the latest submission
    pub operation: OperationResult,
    /// Sequence number of the latest issued request
    pub request_seq: u64,
    /// Whether the generation service answered the startup probe
    pub service_connected: bool,
}

impl AppState {
    /// Start a new request: clears any prior result, enters `Loading` and
    /// returns the sequence number the response must carry to be applied.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.operation = OperationResult::Loading;
        self.request_seq
    }

    /// Apply a finished request outcome. A response that is no longer the
    /// latest in-flight request is dropped; returns whether it was applied.
    pub fn apply_outcome(&mut self, seq: u64, outcome: OperationResult) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.operation = outcome;
        true
    }
}
