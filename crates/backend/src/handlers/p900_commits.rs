use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::projections::p900_commits::dto::{Commit, CommitsQuery};

use super::{status_of, store};
use crate::projections::p900_commits;

/// GET /api/workspaces/:workspace/commits?application=&component=
pub async fn list(
    Path(workspace): Path<String>,
    Query(query): Query<CommitsQuery>,
) -> Result<Json<Vec<Commit>>, StatusCode> {
    let store = store()?;
    match p900_commits::service::list(store, &workspace, &query) {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(status_of(&e)),
    }
}
