pub mod config;
pub mod routes;
pub mod templates;
pub mod endpoints;
pub mod converter;
pub mod compressor;
pub mod request_logger;
pub mod errors;


use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use axum::{extract::DefaultBodyLimit, http::{header, HeaderName}, Router};
use tower::ServiceBuilder;
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};

use config::Config;
use routes::{RouteError, RouteTable};

pub struct State {
    pub config: Config,
    pub routes: RouteTable,
    request_counter: AtomicU64,
}

impl State {
    pub fn new(config: Config) -> Result<State, RouteError> {
        let routes = RouteTable::with_base(&config.base_url)?;
        Ok(State {
            config,
            routes,
            request_counter: AtomicU64::new(0),
        })
    }

    /// Ids start at 1 and are never reused within a process.
    pub fn next_request_id(&self) -> u64 {
        self.request_counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

pub type SharedState = Arc<State>;

/// The complete application, ready to be served.
pub fn app(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("ngrok-skip-browser-warning"),
        ]);

    endpoints::get_router(&state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(state.config.max_upload_bytes)),
        )
        .with_state(state)
}
