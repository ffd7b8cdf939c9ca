//! # doccal API
//!
//! HTTP front end for the in-memory doctor appointment calendar.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Decode requests and call into the appointment store
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Environment-driven application configuration
//!
//! The store itself lives in `doccal-store`; this crate only owns it behind a
//! mutex so requests mutate it one at a time.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use doccal_store::{AppointmentRepository, InMemoryAppointmentStore};
use eyre::Result;
use tokio::{net::TcpListener, sync::Mutex};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// The repository sits behind a single async mutex: one request holds it for
/// the duration of one store operation.
///
/// # Example
///
/// ```
/// use doccal_api::ApiState;
/// use doccal_store::InMemoryAppointmentStore;
///
/// let state = ApiState::new(InMemoryAppointmentStore::default());
/// ```
pub struct ApiState {
    pub store: Mutex<Box<dyn AppointmentRepository>>,
}

impl ApiState {
    pub fn new(repository: impl AppointmentRepository + 'static) -> Self {
        Self {
            store: Mutex::new(Box::new(repository)),
        }
    }
}

/// Builds the router with every endpoint and request tracing attached.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Appointment endpoints
        .merge(routes::appointment::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
        .allow_origin(AllowOrigin::list(origins))
}

/// Starts the API server with the provided configuration
///
/// Initializes logging, creates an empty appointment store, and serves
/// until the process is stopped.
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store = InMemoryAppointmentStore::new(config.id_strategy);
    let state = Arc::new(ApiState::new(store));
    info!("Appointment ids assigned by {:?}", config.id_strategy);

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
