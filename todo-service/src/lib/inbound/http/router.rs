use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::create_todo::create_todo;
use crate::inbound::http::handlers::list_todos::list_todos;
use crate::inbound::http::handlers::signin::signin;
use crate::inbound::http::handlers::signup::signup;
use crate::inbound::http::middleware::authenticate as auth_middleware;

/// Shared handler state: the domain services behind their ports.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub todo_service: Arc<dyn TodoServicePort>,
}

/// Build the HTTP router.
///
/// `/signup` and `/signin` are public; everything under the todo routes sits
/// behind the authentication gate.
pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    todo_service: Arc<dyn TodoServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        todo_service,
    };

    let public_routes = Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin));

    let protected_routes = Router::new()
        .route("/todo", post(create_todo))
        .route("/todos", get(list_todos))
        .route_layer(middleware::from_fn_with_state(
            authenticator,
            auth_middleware,
        ));

    // Trace spans omit request headers; bearer tokens must not reach the logs
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis() as u64,
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
