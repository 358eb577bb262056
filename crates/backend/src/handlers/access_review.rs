use axum::{extract::Path, http::StatusCode, Json};
use contracts::system::access::{AccessReviewRequest, AccessReviewResponse};

use super::{status_of, store};
use crate::system::access::policy::get_policy;

/// POST /api/workspaces/:workspace/access-review
pub async fn review(
    Path(workspace): Path<String>,
    Json(request): Json<AccessReviewRequest>,
) -> Result<Json<AccessReviewResponse>, StatusCode> {
    // unknown workspaces get 404 rather than a decision
    store()?.workspace(&workspace).map_err(|e| status_of(&e))?;
    Ok(Json(get_policy().review(&workspace, &request)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::store::test_support::install_test_store;
    use crate::system::access::policy::install_test_policy;
    use contracts::system::access::{RESOURCE_APPLICATIONS, RESOURCE_COMPONENTS, VERB_CREATE};

    async fn allowed(workspace: &str, resource: &str, verb: &str) -> Result<bool, StatusCode> {
        install_test_store();
        install_test_policy();
        let Json(response) = review(
            Path(workspace.to_string()),
            Json(AccessReviewRequest::new(resource, verb)),
        )
        .await?;
        Ok(response.allowed)
    }

    #[tokio::test]
    async fn test_create_allowed_in_writable_workspace() {
        assert_eq!(allowed("w1", RESOURCE_APPLICATIONS, VERB_CREATE).await, Ok(true));
        assert_eq!(allowed("w1", RESOURCE_COMPONENTS, VERB_CREATE).await, Ok(true));
    }

    #[tokio::test]
    async fn test_create_denied_in_read_only_workspace() {
        assert_eq!(allowed("w2", RESOURCE_APPLICATIONS, VERB_CREATE).await, Ok(false));
        assert_eq!(allowed("w2", RESOURCE_COMPONENTS, "list").await, Ok(true));
    }

    #[tokio::test]
    async fn test_unknown_workspace_is_404() {
        assert_eq!(
            allowed("missing", RESOURCE_APPLICATIONS, VERB_CREATE).await,
            Err(StatusCode::NOT_FOUND)
        );
    }
}
