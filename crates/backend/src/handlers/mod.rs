pub mod a001_application;
pub mod a002_component;
pub mod a003_pipeline_run;
pub mod access_review;
pub mod p900_commits;
pub mod workspace;

use crate::shared::data::store::{get_store, StoreError, WorkspaceStore};
use axum::http::StatusCode;

pub(crate) fn status_of(err: &StoreError) -> StatusCode {
    match err {
        StoreError::WorkspaceNotFound(_) | StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => {
            tracing::error!("store error: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub(crate) fn store() -> Result<&'static WorkspaceStore, StatusCode> {
    get_store().map_err(|e| status_of(&e))
}
