use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::SharedState;

/// A route as seen by clients that navigate programmatically.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RouteEntry {
    pub name: String,
    pub path: String,
    pub href: String,
}

pub async fn routes(State(state): State<SharedState>) -> Json<Vec<RouteEntry>> {
    let table = &state.routes;
    let entries = table
        .routes()
        .iter()
        .map(|route| RouteEntry {
            name: route.name.to_string(),
            path: route.path.to_string(),
            href: table.history().join(route.path),
        })
        .collect();

    Json(entries)
}
