use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Method, Request, StatusCode};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

use crate::errors::ApiError;

pub mod configuration;
pub mod errors;
pub mod service;
pub mod store;
pub mod structs;
pub mod telemetry;
pub mod validation;

pub use service::PersonService;
pub use store::PersonStore;

async fn create_person(
    State(service): State<PersonService>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    service.create_person(&body)?;
    Ok(StatusCode::CREATED)
}

async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotSupported(method.to_string())
}

pub async fn run(listener: TcpListener, service: PersonService) -> std::io::Result<()> {
    axum::serve(listener, app(service).into_make_service()).await
}

pub fn app(service: PersonService) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetSensitiveRequestHeadersLayer::new([
            axum::http::header::AUTHORIZATION,
            axum::http::header::COOKIE,
        ]))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default();
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id());

    Router::new()
        .route("/pessoas", post(create_person).fallback(method_not_allowed))
        .layer(middleware)
        .with_state(service)
}
