//! Accounts Domain
//!
//! Sign-up flow for new accounts: request validation, duplicate-email
//! gating, password hashing, persistence, and error logging.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │   Route adapter      │  ← POST /signup (axum)
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │  LogControllerDecorator  ← records 500 stacks, response unchanged
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │   SignUpController   │  ← validation composite + response mapping
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │  AddAccountService   │  ← email gate, hashing, persistence
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │    Repositories      │  ← trait + in-memory / MongoDB implementations
//! └──────────────────────┘
//! ```
//!
//! Validation failures come back as 400 values; infrastructure failures
//! propagate as `Err` and are converted to a 500 exactly once, at the
//! controller boundary. The client never sees more than a generic server
//! error; the stack goes to the log repository via the decorator.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_accounts::{
//!     controller::SignUpController,
//!     decorator::LogControllerDecorator,
//!     email::EmailValidatorAdapter,
//!     handlers,
//!     hasher::Argon2Hasher,
//!     repository::{InMemoryAccountRepository, InMemoryLogRepository},
//!     service::AddAccountService,
//!     validation::CompositeValidation,
//! };
//!
//! let validation = CompositeValidation::for_sign_up(Arc::new(EmailValidatorAdapter::new()));
//! let service = AddAccountService::new(InMemoryAccountRepository::new(), Argon2Hasher::new());
//! let controller = SignUpController::new(Box::new(validation), service);
//! let decorated = LogControllerDecorator::new(controller, InMemoryLogRepository::new());
//!
//! let router = handlers::router(Arc::new(decorated));
//! ```

pub mod controller;
pub mod decorator;
pub mod email;
pub mod error;
pub mod handlers;
pub mod hasher;
pub mod http;
pub mod models;
pub mod mongo_repository_impl;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use controller::{Controller, SignUpController};
pub use decorator::LogControllerDecorator;
pub use email::{EmailValidator, EmailValidatorAdapter};
pub use error::{AccountError, AccountResult, ValidationError};
pub use hasher::{Argon2Hasher, Hasher};
pub use http::{HttpRequest, HttpResponse};
pub use models::{Account, AddAccount, SignUpRequest};
pub use mongo_repository_impl::{MongoAccountRepository, MongoLogRepository};
pub use repository::{
    AccountRepository, InMemoryAccountRepository, InMemoryLogRepository, LogRepository,
};
pub use service::{AddAccountService, AddAccountUseCase};
pub use validation::{CompositeValidation, Validation};
