use serde::{Deserialize, Serialize};

/// Account entity as persisted and returned on a successful sign-up.
///
/// The `password` field always holds the one-way hash, never the plain
/// text. The identifier is assigned by the repository at persistence time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned by the repository
    pub id: String,
    /// Display name
    pub name: String,
    /// Account email (unique per account)
    pub email: String,
    /// Hashed password
    pub password: String,
}

/// Input to the add-account use case.
///
/// Carries the plain password on the way in; the use case hashes it before
/// handing it to the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign-up request body fields, camelCase on the wire.
///
/// Destructured from the raw JSON body only after the validation composite
/// has accepted it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl SignUpRequest {
    /// Required body fields, in the order validation reports them.
    pub const REQUIRED_FIELDS: [&'static str; 4] =
        ["name", "email", "password", "passwordConfirmation"];
}

impl From<SignUpRequest> for AddAccount {
    fn from(request: SignUpRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}
