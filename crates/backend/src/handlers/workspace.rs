use axum::{extract::Path, http::StatusCode, Json};
use contracts::system::workspace::WorkspaceInfo;

use super::{status_of, store};

/// GET /api/workspaces/:workspace
pub async fn get_info(Path(workspace): Path<String>) -> Result<Json<WorkspaceInfo>, StatusCode> {
    let store = store()?;
    match store.workspace(&workspace) {
        Ok(ws) => Ok(Json(ws.info.clone())),
        Err(e) => Err(status_of(&e)),
    }
}
