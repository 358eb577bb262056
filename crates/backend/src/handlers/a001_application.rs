use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_application::aggregate::Application;

use super::{status_of, store};
use crate::domain::a001_application;

/// GET /api/workspaces/:workspace/applications
pub async fn list_all(
    Path(workspace): Path<String>,
) -> Result<Json<Vec<Application>>, StatusCode> {
    let store = store()?;
    match a001_application::service::list_all(store, &workspace) {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(status_of(&e)),
    }
}

/// GET /api/workspaces/:workspace/applications/:name
pub async fn get_by_name(
    Path((workspace, name)): Path<(String, String)>,
) -> Result<Json<Application>, StatusCode> {
    let store = store()?;
    match a001_application::service::get_by_name(store, &workspace, &name) {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(status_of(&e)),
    }
}
