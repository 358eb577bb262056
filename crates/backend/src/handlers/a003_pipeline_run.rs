use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a003_pipeline_run::aggregate::{PipelineRun, PipelineRunsQuery};

use super::{status_of, store};
use crate::domain::a003_pipeline_run;

/// GET /api/workspaces/:workspace/pipelineruns?application=&component=&exclude_snapshot_tests=
pub async fn list(
    Path(workspace): Path<String>,
    Query(query): Query<PipelineRunsQuery>,
) -> Result<Json<Vec<PipelineRun>>, StatusCode> {
    let store = store()?;
    match a003_pipeline_run::service::list(store, &workspace, &query) {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(status_of(&e)),
    }
}
