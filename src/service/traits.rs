//! Trait abstraction for the service client to enable mocking in tests

use async_trait::async_trait;

use super::client::{
    GenerateRequest, GenerateResponse, ModifyRequest, ModifyResponse, ServiceError,
};

/// Trait for generation service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Check if the service is reachable
    async fn check_connection(&self) -> bool;

    /// Request a model generated from a shape description
    async fn generate_model(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, ServiceError>;

    /// Request a model generated and then modified
    async fn modify_model(&self, request: ModifyRequest) -> Result<ModifyResponse, ServiceError>;
}
