use std::net::SocketAddr;

use askama::Template;
use axum::{
    extract::{ConnectInfo, State},
    response::Html,
};
use tracing::info;

use crate::{
    converter::config::{DEFAULT_CHARS, DEFAULT_OUTPUT_WIDTH, MAX_OUTPUT_WIDTH},
    errors::ApiError,
    routes::View,
    templates::{ConverterView, Layout},
    SharedState,
};

pub async fn converter(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Html<String>, ApiError> {
    info!("[{}] Received GET request for the converter view", addr);

    let routes = &state.routes;
    let view = ConverterView {
        layout: Layout::new(routes, Some(View::Converter)),
        api_url: routes.history().join("/api/convert"),
        default_width: DEFAULT_OUTPUT_WIDTH,
        max_width: MAX_OUTPUT_WIDTH,
        default_charset: DEFAULT_CHARS.iter().collect(),
    };

    Ok(Html(view.render()?))
}
