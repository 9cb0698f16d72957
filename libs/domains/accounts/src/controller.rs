use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AccountError, AccountResult, ValidationError};
use crate::http::{bad_request, ok, server_error, HttpRequest, HttpResponse};
use crate::models::{AddAccount, SignUpRequest};
use crate::service::AddAccountUseCase;
use crate::validation::Validation;

/// The one contract the core exposes to its host: a request handler
/// producing the uniform response envelope. Any transport adapter (an HTTP
/// route, a test harness) drives the flow through this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}

/// Sign-up request handler: validation, then the add-account use case,
/// with every infrastructure failure caught here and mapped to a 500.
pub struct SignUpController<A: AddAccountUseCase> {
    validation: Box<dyn Validation>,
    add_account: Arc<A>,
}

impl<A: AddAccountUseCase> SignUpController<A> {
    pub fn new(validation: Box<dyn Validation>, add_account: A) -> Self {
        Self {
            validation,
            add_account: Arc::new(add_account),
        }
    }

    async fn sign_up(&self, request: &HttpRequest) -> AccountResult<HttpResponse> {
        if let Some(error) = self.validation.validate(&request.body)? {
            return Ok(bad_request(error));
        }

        let SignUpRequest {
            name,
            email,
            password,
            password_confirmation: _,
        } = serde_json::from_value(request.body.clone())
            .map_err(|e| AccountError::Internal(format!("validated body failed to parse: {e}")))?;

        let created = self
            .add_account
            .add(AddAccount {
                name,
                email,
                password,
            })
            .await?;

        match created {
            Some(account) => Ok(ok(account)),
            // Pre-existing email: the use case produced no account.
            None => Ok(bad_request(ValidationError::invalid("email"))),
        }
    }
}

#[async_trait]
impl<A: AddAccountUseCase> Controller for SignUpController<A> {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        match self.sign_up(&request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(error = %error, "Sign-up failed with a server error");
                server_error(&error)
            }
        }
    }
}
