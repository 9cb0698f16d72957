//! Transport-agnostic request/response envelope for the controller contract.
//!
//! Every controller produces an [`HttpResponse`] with a status of 200, 400
//! or 500 and a body that is either the created account or an error object
//! with a human-readable message. A 500 body additionally carries the error
//! stack for the logging decorator; that stack is never serialized.

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::error::{AccountError, ValidationError};
use crate::models::Account;

/// Inbound request as seen by a controller: just the parsed JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub body: Value,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self { body }
    }
}

/// Uniform response envelope produced by every controller.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: HttpBody,
}

impl HttpResponse {
    pub fn is_server_error(&self) -> bool {
        self.status_code == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Stack detail of a server-error body, if any. Read by the logging
    /// decorator; never part of the serialized response.
    pub fn error_stack(&self) -> Option<&str> {
        match &self.body {
            HttpBody::Error(body) => body.stack.as_deref(),
            HttpBody::Account(_) => None,
        }
    }
}

/// Response body: the created account on success, an error object otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpBody {
    Account(Account),
    Error(ErrorBody),
}

impl HttpBody {
    /// Client-visible JSON rendering. The stack stays internal.
    pub fn to_json(&self) -> Value {
        match self {
            HttpBody::Account(account) => {
                json!({
                    "id": account.id,
                    "name": account.name,
                    "email": account.email,
                    "password": account.password,
                })
            }
            HttpBody::Error(body) => json!({ "error": body.error }),
        }
    }
}

/// Error payload: the message shown to the client plus the internal stack
/// kept for the log repository on server errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub stack: Option<String>,
}

/// 200 with the created account as body.
pub fn ok(account: Account) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK,
        body: HttpBody::Account(account),
    }
}

/// 400 with the validation error message as body.
pub fn bad_request(error: ValidationError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: HttpBody::Error(ErrorBody {
            error: error.to_string(),
            stack: None,
        }),
    }
}

/// 500 with a generic message; the original error detail is preserved only
/// in the internal stack.
pub fn server_error(error: &AccountError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: HttpBody::Error(ErrorBody {
            error: "Internal server error".to_string(),
            stack: Some(error.stack()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: "valid_id".to_string(),
            name: "valid_name".to_string(),
            email: "valid_email@mail.com".to_string(),
            password: "valid_password".to_string(),
        }
    }

    #[test]
    fn ok_wraps_the_account() {
        let response = ok(account());
        assert_eq!(response.status_code, StatusCode::OK);
        assert_eq!(response.body, HttpBody::Account(account()));
        assert!(!response.is_server_error());
    }

    #[test]
    fn bad_request_carries_the_validation_message() {
        let response = bad_request(ValidationError::missing("name"));
        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body.to_json(),
            serde_json::json!({ "error": "Missing param: name" })
        );
        assert!(response.error_stack().is_none());
    }

    #[test]
    fn server_error_is_generic_to_the_client() {
        let err = AccountError::Internal("boom".to_string());
        let response = server_error(&err);

        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.body.to_json(),
            serde_json::json!({ "error": "Internal server error" })
        );
        // Detail is kept for logging, not for the client.
        assert_eq!(response.error_stack(), Some("Internal error: boom"));
    }

    #[test]
    fn serialized_server_error_has_no_stack_key() {
        let err = AccountError::Internal("boom".to_string());
        let rendered = server_error(&err).body.to_json();
        assert!(rendered.get("stack").is_none());
    }
}
