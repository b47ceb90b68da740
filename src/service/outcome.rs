//! Response classification for the generation service
//!
//! Maps the three possible exchange outcomes (success body, recognized
//! rejection, transport failure) onto [`OperationResult`]. The shape-rejection
//! marker check is isolated here so the matching rule can be swapped without
//! touching state transitions.

use crate::service::client::{GenerateResponse, ModifyResponse, ServiceError};
use crate::state::{OperationResult, RequestKind};

/// Case-sensitive substring the service uses to signal an unparseable
/// shape description
const SHAPE_REJECTION_MARKER: &str = "Shape not recognized";

fn is_shape_rejection(error: Option<&str>) -> bool {
    error.is_some_and(|e| e.contains(SHAPE_REJECTION_MARKER))
}

fn transport_error(kind: RequestKind, detail: &str) -> OperationResult {
    OperationResult::TransportError {
        message: format!("{}{}", kind.transport_prefix(), detail),
    }
}

/// Classify the outcome of a generate exchange
pub fn classify_generate(
    result: Result<GenerateResponse, ServiceError>,
) -> OperationResult {
    let kind = RequestKind::Generate;
    match result {
        Ok(body) if is_shape_rejection(body.error.as_deref()) => OperationResult::DomainError {
            message: kind.domain_hint().to_string(),
        },
        Ok(GenerateResponse {
            file: Some(file), ..
        }) => OperationResult::Success {
            kind,
            file_ref: file,
        },
        // A well-formed response carrying neither a recognized error nor an
        // artifact path is treated as a transport-level failure.
        Ok(_) => transport_error(kind, "Server error."),
        Err(err) => transport_error(kind, err.detail()),
    }
}

/// Classify the outcome of a modify exchange
pub fn classify_modify(result: Result<ModifyResponse, ServiceError>) -> OperationResult {
    let kind = RequestKind::Modify;
    match result {
        Ok(body) if is_shape_rejection(body.error.as_deref()) => OperationResult::DomainError {
            message: kind.domain_hint().to_string(),
        },
        Ok(ModifyResponse {
            modified_file: Some(file),
            ..
        }) => OperationResult::Success {
            kind,
            file_ref: file,
        },
        Ok(_) => transport_error(kind, "Server error."),
        Err(err) => transport_error(kind, err.detail()),
    }
}
