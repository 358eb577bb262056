use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a002_component::aggregate::{Component, ComponentsQuery};

use super::{status_of, store};
use crate::domain::a002_component;

/// GET /api/workspaces/:workspace/components?application=
pub async fn list(
    Path(workspace): Path<String>,
    Query(query): Query<ComponentsQuery>,
) -> Result<Json<Vec<Component>>, StatusCode> {
    let store = store()?;
    match a002_component::service::list(store, &workspace, &query) {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(status_of(&e)),
    }
}

/// GET /api/workspaces/:workspace/components/:name
pub async fn get_by_name(
    Path((workspace, name)): Path<(String, String)>,
) -> Result<Json<Component>, StatusCode> {
    let store = store()?;
    match a002_component::service::get_by_name(store, &workspace, &name) {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(status_of(&e)),
    }
}
