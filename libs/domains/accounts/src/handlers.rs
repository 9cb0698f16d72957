use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;

use crate::controller::Controller;
use crate::http::HttpRequest;

/// Route adapter: mounts the controller contract on `POST /signup`.
///
/// The adapter owns nothing but the translation between the transport and
/// the envelope; any controller (decorated or not) plugs in unchanged.
pub fn router(controller: Arc<dyn Controller>) -> Router {
    Router::new()
        .route("/signup", post(sign_up))
        .with_state(controller)
}

/// Sign up a new account
///
/// POST /signup
async fn sign_up(
    State(controller): State<Arc<dyn Controller>>,
    Json(body): Json<Value>,
) -> Response {
    let response = controller.handle(HttpRequest::new(body)).await;
    (response.status_code, Json(response.body.to_json())).into_response()
}
