use validator::ValidateEmail;

use crate::error::AccountResult;

/// Email-syntax checking capability.
///
/// The fallible return exists for the caller's sake: a checker that breaks
/// internally must surface as a server error, never as a panic or a bogus
/// validation verdict.
#[cfg_attr(test, mockall::automock)]
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> AccountResult<bool>;
}

/// Adapter over the `validator` crate's email syntax check.
#[derive(Debug, Default, Clone)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AccountResult<bool> {
        Ok(email.validate_email())
    }
}
