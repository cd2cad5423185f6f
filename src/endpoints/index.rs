use std::net::SocketAddr;

use askama::Template;
use axum::{
    extract::{ConnectInfo, State},
    response::Html,
};
use tracing::info;

use crate::{
    errors::ApiError,
    routes::{View, CONVERTER},
    templates::{HomeView, Layout},
    SharedState,
};

pub async fn index(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Html<String>, ApiError> {
    info!("[{}] Received GET request for the home view", addr);

    let routes = &state.routes;
    let home = HomeView {
        layout: Layout::new(routes, Some(View::Home)),
        converter_url: routes.href(CONVERTER).unwrap_or_default(),
    };

    Ok(Html(home.render()?))
}
