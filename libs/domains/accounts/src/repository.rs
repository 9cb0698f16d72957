use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AccountResult;
use crate::models::{Account, AddAccount};

/// Persistence capability for accounts.
///
/// `add` assigns the identifier; callers hand in already-hashed passwords.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account and return it with its generated id.
    async fn add(&self, input: AddAccount) -> AccountResult<Account>;

    /// Look up an account by its exact email address.
    async fn find_by_email(&self, email: &str) -> AccountResult<Option<Account>>;
}

/// Write-only sink for server-error stacks. Fire-and-forget, no read path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogRepository: Send + Sync {
    async fn log(&self, stack: &str) -> AccountResult<()>;
}

/// In-memory implementation of [`AccountRepository`] (development/testing).
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn add(&self, input: AddAccount) -> AccountResult<Account> {
        let account = Account {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            password: input.password,
        };

        let mut accounts = self.accounts.write().await;
        accounts.insert(account.id.clone(), account.clone());

        tracing::info!(account_id = %account.id, email = %account.email, "Created account");
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }
}

/// In-memory implementation of [`LogRepository`] (development/testing).
#[derive(Debug, Default, Clone)]
pub struct InMemoryLogRepository {
    entries: Arc<RwLock<Vec<String>>>,
}

impl InMemoryLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub async fn entries(&self) -> Vec<String> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl LogRepository for InMemoryLogRepository {
    async fn log(&self, stack: &str) -> AccountResult<()> {
        self.entries.write().await.push(stack.to_string());
        Ok(())
    }
}
