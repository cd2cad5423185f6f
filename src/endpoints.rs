pub(crate) mod index;
pub(crate) mod converter;
pub(crate) mod not_found;
pub(crate) mod api;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::{routes::View, SharedState};

/// Mounts one GET handler per route table entry, plus the API and static
/// assets, all below the history base path.
///
/// The view fallback is set before nesting under the base: axum only keeps
/// the nested `/api` fallback when the nested router has a fallback too.
pub fn get_router(state: &SharedState) -> Router<SharedState> {
    let routes = &state.routes;

    let mut app = Router::new();
    for route in routes.routes() {
        let handler = match route.view {
            View::Home => get(index::index),
            View::Converter => get(converter::converter),
        };
        app = app.route(route.path, handler);
    }

    let app = app
        .nest("/api", api::get_router())
        .nest_service("/assets", ServeDir::new(&state.config.static_dir))
        .fallback(not_found::not_found);

    let history = routes.history();
    if history.is_root() {
        app
    } else {
        Router::new()
            .nest(history.base(), app)
            .fallback(not_found::not_found)
    }
}
