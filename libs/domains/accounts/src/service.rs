use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AccountResult;
use crate::hasher::Hasher;
use crate::models::{Account, AddAccount};
use crate::repository::AccountRepository;

/// Add-account use case contract.
///
/// `Ok(None)` means no account was produced because the email is already
/// taken; the caller decides how to surface that. Infrastructure failures
/// propagate as `Err` for the controller boundary to catch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccountUseCase: Send + Sync {
    async fn add(&self, input: AddAccount) -> AccountResult<Option<Account>>;
}

/// Default implementation: duplicate-email gate, then hash, then persist.
#[derive(Clone)]
pub struct AddAccountService<R: AccountRepository, H: Hasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: AccountRepository, H: Hasher> AddAccountService<R, H> {
    pub fn new(repository: R, hasher: H) -> Self {
        Self {
            repository: Arc::new(repository),
            hasher: Arc::new(hasher),
        }
    }
}

#[async_trait]
impl<R: AccountRepository, H: Hasher> AddAccountUseCase for AddAccountService<R, H> {
    async fn add(&self, input: AddAccount) -> AccountResult<Option<Account>> {
        if self.repository.find_by_email(&input.email).await?.is_some() {
            tracing::debug!(email = %input.email, "Email already registered, no account produced");
            return Ok(None);
        }

        let hashed = self.hasher.hash(&input.password)?;

        let account = self
            .repository
            .add(AddAccount {
                name: input.name,
                email: input.email,
                password: hashed,
            })
            .await?;

        Ok(Some(account))
    }
}
