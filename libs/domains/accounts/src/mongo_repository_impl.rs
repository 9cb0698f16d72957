//! MongoDB-backed repository implementations.
//!
//! Both repositories are built from an explicitly injected database handle
//! whose lifecycle belongs to the bootstrap layer: opened at process start,
//! dropped at shutdown. Nothing here touches ambient global state.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, DateTime};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::error::{AccountError, AccountResult};
use crate::models::{Account, AddAccount};
use crate::repository::{AccountRepository, LogRepository};

const ACCOUNTS_COLLECTION: &str = "accounts";
const ERROR_LOGS_COLLECTION: &str = "errors";

/// Stored shape of an account document.
#[derive(Debug, Serialize, Deserialize)]
struct AccountDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    password: String,
}

impl AccountDocument {
    fn into_account(self) -> AccountResult<Account> {
        let id = self
            .id
            .ok_or_else(|| AccountError::Internal("account document without an _id".to_string()))?;

        Ok(Account {
            id: id.to_hex(),
            name: self.name,
            email: self.email,
            password: self.password,
        })
    }
}

/// [`AccountRepository`] over the `accounts` collection.
#[derive(Debug, Clone)]
pub struct MongoAccountRepository {
    collection: Collection<AccountDocument>,
}

impl MongoAccountRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(ACCOUNTS_COLLECTION),
        }
    }
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    async fn add(&self, input: AddAccount) -> AccountResult<Account> {
        let document = AccountDocument {
            id: None,
            name: input.name,
            email: input.email,
            password: input.password,
        };

        let inserted = self.collection.insert_one(&document).await?;
        let id = inserted.inserted_id.as_object_id().ok_or_else(|| {
            AccountError::Internal("insert did not yield an ObjectId".to_string())
        })?;

        tracing::info!(account_id = %id.to_hex(), email = %document.email, "Created account");

        Ok(Account {
            id: id.to_hex(),
            name: document.name,
            email: document.email,
            password: document.password,
        })
    }

    async fn find_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
        let found = self.collection.find_one(doc! { "email": email }).await?;
        found.map(AccountDocument::into_account).transpose()
    }
}

/// Stored shape of an error-log document.
#[derive(Debug, Serialize, Deserialize)]
struct ErrorLogDocument {
    stack: String,
    date: DateTime,
}

/// [`LogRepository`] over the `errors` collection. Write-only.
#[derive(Debug, Clone)]
pub struct MongoLogRepository {
    collection: Collection<ErrorLogDocument>,
}

impl MongoLogRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(ERROR_LOGS_COLLECTION),
        }
    }
}

#[async_trait]
impl LogRepository for MongoLogRepository {
    async fn log(&self, stack: &str) -> AccountResult<()> {
        let document = ErrorLogDocument {
            stack: stack.to_string(),
            date: DateTime::now(),
        };

        self.collection.insert_one(&document).await?;
        Ok(())
    }
}
