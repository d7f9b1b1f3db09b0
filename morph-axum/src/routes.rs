use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use morph_core::ResizeRequest;

use crate::{HttpResponse, MorphAxumState};

pub async fn health() -> &'static str {
    "ok"
}

pub async fn resize(
    State(state): State<MorphAxumState>,
    Path(key): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> HttpResponse {
    let request = ResizeRequest::from_parts(&key, &query);
    HttpResponse(state.resizer.handle(request).await)
}

/// `/` carries no key; the resizer rejects it like any other empty path.
pub async fn resize_root(
    State(state): State<MorphAxumState>,
    Query(query): Query<HashMap<String, String>>,
) -> HttpResponse {
    let request = ResizeRequest::from_parts("", &query);
    HttpResponse(state.resizer.handle(request).await)
}
