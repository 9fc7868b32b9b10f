//! HTTP frontend for the grade explainer.
//!
//! `GET /` describes the service, `POST /explain/` returns the Grade 2 and
//! Grade 5 explanations of a question, `/docs` and `/redoc` render the OpenAPI
//! document served at `/openapi.json`.

mod docs;
mod error;
mod routes;
pub use error::ApiError;
pub use routes::{CombinedResponse, GradeResponse, QuestionRequest};

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use text_completion::CompletionHandler;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::*;

pub const TITLE: &str = "Grade-Specific GPT Responses API";

#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key was configured; `/explain/` then answers 500.
    pub handler: Option<Arc<dyn CompletionHandler>>,
}

pub fn router(state: AppState) -> Router {
    let explain = Router::new()
        .route("/explain/", post(routes::explain))
        .route("/explain", post(routes::explain))
        .route_layer(middleware::map_request(default_json_content_type));

    Router::new()
        .route("/", get(routes::root))
        .merge(explain)
        .route("/openapi.json", get(docs::openapi))
        .route("/docs", get(docs::swagger_ui))
        .route("/redoc", get(docs::redoc))
        .with_state(state)
}

/// A body sent without any content type is read as json.
async fn default_json_content_type(mut req: Request) -> Request {
    if !req.headers().contains_key(header::CONTENT_TYPE) {
        req.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
    }
    req
}

/// Serves the API on `addr` until Ctrl-C.
pub async fn init(
    addr: &str,
    handler: Option<Arc<dyn CompletionHandler>>,
) -> Result<(), std::io::Error> {
    let app = router(AppState { handler }).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!("Server listening on http://{}", local);
    info!("API Documentation available at: http://{}/docs", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _signal_err = tokio::signal::ctrl_c().await;
            info!("Received Ctrl-C, shutting down.");
        })
        .await
}
