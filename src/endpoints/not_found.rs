use askama::Template;
use axum::{
    extract::{OriginalUri, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use hyper::StatusCode;
use tracing::debug;

use crate::{
    errors::ApiError,
    routes::HOME,
    templates::{Layout, NotFound},
    SharedState,
};

/// Redirects non-canonical spellings of a known route (e.g. a trailing
/// slash) and renders the not-found view for everything else.
pub async fn not_found(State(state): State<SharedState>, OriginalUri(uri): OriginalUri) -> Result<Response, ApiError> {
    let routes = &state.routes;

    if let Some(route) = routes.resolve(uri.path()) {
        let canonical = routes.history().join(route.path);
        if canonical != uri.path() {
            debug!("Redirecting {} to {}", uri.path(), canonical);
            return Ok(Redirect::permanent(&canonical).into_response());
        }
    }

    debug!("No route for {}", uri.path());
    let page = NotFound {
        layout: Layout::new(routes, None),
        home_url: routes.href(HOME).unwrap_or_else(|| routes.history().base().to_string()),
    };

    Ok((StatusCode::NOT_FOUND, Html(page.render()?)).into_response())
}
