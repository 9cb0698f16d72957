//! Field validation for the sign-up body.
//!
//! Every validator shares one contract and operates on the raw JSON body.
//! The composite runs them in a fixed order and stops at the first failure,
//! so a request missing several fields always reports the first missing
//! field by declaration order. Validation failures are returned as values;
//! an `Err` from a validator means its underlying capability broke and the
//! controller turns that into a 500.

use std::sync::Arc;

use serde_json::Value;

use crate::email::EmailValidator;
use crate::error::{AccountResult, ValidationError};
use crate::models::SignUpRequest;

/// Single validation step over the raw request body.
#[cfg_attr(test, mockall::automock)]
pub trait Validation: Send + Sync {
    /// `Ok(Some(..))` rejects the input, `Ok(None)` accepts it, `Err` is an
    /// internal failure of the validator itself.
    fn validate(&self, input: &Value) -> AccountResult<Option<ValidationError>>;
}

/// Ordered list of validators with first-error short-circuit.
pub struct CompositeValidation {
    validations: Vec<Box<dyn Validation>>,
}

impl CompositeValidation {
    pub fn new(validations: Vec<Box<dyn Validation>>) -> Self {
        Self { validations }
    }

    /// The fixed validator list for the sign-up flow: required fields in
    /// declaration order, then password confirmation, then email syntax.
    pub fn for_sign_up(email_validator: Arc<dyn EmailValidator>) -> Self {
        let mut validations: Vec<Box<dyn Validation>> = SignUpRequest::REQUIRED_FIELDS
            .into_iter()
            .map(|field| Box::new(RequiredFieldValidation::new(field)) as Box<dyn Validation>)
            .collect();

        validations.push(Box::new(CompareFieldsValidation::new(
            "password",
            "passwordConfirmation",
        )));
        validations.push(Box::new(EmailValidation::new("email", email_validator)));

        Self::new(validations)
    }
}

impl Validation for CompositeValidation {
    fn validate(&self, input: &Value) -> AccountResult<Option<ValidationError>> {
        for validation in &self.validations {
            if let Some(error) = validation.validate(input)? {
                return Ok(Some(error));
            }
        }
        Ok(None)
    }
}

/// Rejects a body whose field is absent, null, empty, or otherwise falsy.
pub struct RequiredFieldValidation {
    field: String,
}

impl RequiredFieldValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Validation for RequiredFieldValidation {
    fn validate(&self, input: &Value) -> AccountResult<Option<ValidationError>> {
        if is_present(input.get(&self.field)) {
            Ok(None)
        } else {
            Ok(Some(ValidationError::missing(&self.field)))
        }
    }
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

/// Rejects a body whose two fields differ; the error names the second one.
pub struct CompareFieldsValidation {
    field: String,
    field_to_compare: String,
}

impl CompareFieldsValidation {
    pub fn new(field: impl Into<String>, field_to_compare: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            field_to_compare: field_to_compare.into(),
        }
    }
}

impl Validation for CompareFieldsValidation {
    fn validate(&self, input: &Value) -> AccountResult<Option<ValidationError>> {
        if input.get(&self.field) == input.get(&self.field_to_compare) {
            Ok(None)
        } else {
            Ok(Some(ValidationError::invalid(&self.field_to_compare)))
        }
    }
}

/// Rejects a body whose field fails the email-syntax capability.
pub struct EmailValidation {
    field: String,
    email_validator: Arc<dyn EmailValidator>,
}

impl EmailValidation {
    pub fn new(field: impl Into<String>, email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            field: field.into(),
            email_validator,
        }
    }
}

impl Validation for EmailValidation {
    fn validate(&self, input: &Value) -> AccountResult<Option<ValidationError>> {
        let email = input
            .get(&self.field)
            .and_then(Value::as_str)
            .unwrap_or_default();

        if self.email_validator.is_valid(email)? {
            Ok(None)
        } else {
            Ok(Some(ValidationError::invalid(&self.field)))
        }
    }
}
