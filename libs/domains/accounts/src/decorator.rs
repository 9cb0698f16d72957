use std::sync::Arc;

use async_trait::async_trait;

use crate::controller::Controller;
use crate::http::{HttpRequest, HttpResponse};
use crate::repository::LogRepository;

/// Controller decorator that records server-error stacks.
///
/// Wraps any [`Controller`] by composition: the request goes through
/// unmodified, and the inner response comes back unchanged. The only added
/// behavior is a write to the log repository when the response is a 500.
pub struct LogControllerDecorator<C: Controller, L: LogRepository> {
    inner: C,
    log_repository: Arc<L>,
}

impl<C: Controller, L: LogRepository> LogControllerDecorator<C, L> {
    pub fn new(inner: C, log_repository: L) -> Self {
        Self {
            inner,
            log_repository: Arc::new(log_repository),
        }
    }
}

#[async_trait]
impl<C: Controller, L: LogRepository> Controller for LogControllerDecorator<C, L> {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let response = self.inner.handle(request).await;

        if response.is_server_error() {
            if let Some(stack) = response.error_stack() {
                if let Err(error) = self.log_repository.log(stack).await {
                    // The log sink's reliability is not this decorator's
                    // concern; the caller still gets the real response.
                    tracing::error!(error = %error, "Failed to record error stack");
                }
            }
        }

        response
    }
}
