//! Boolean access gate backed by the access-review endpoint.

use crate::shared::api_utils::{post_json, workspace_path};
use crate::shared::loader::use_loader;
use contracts::system::access::{AccessReviewRequest, AccessReviewResponse};
use leptos::prelude::*;

pub async fn review(workspace: &str, request: &AccessReviewRequest) -> Result<bool, String> {
    let response: AccessReviewResponse =
        post_json(&workspace_path(workspace, "access-review"), request).await?;
    Ok(response.allowed)
}

/// `true` once the backend confirmed `verb` on `resource`.
/// Denied until the answer arrives and when the review fails.
pub fn use_access_review(
    workspace: Memo<String>,
    resource: &'static str,
    verb: &'static str,
) -> Signal<bool> {
    let loader = use_loader(
        move || Some(workspace.get()).filter(|w| !w.is_empty()),
        move |ws: String| async move {
            review(&ws, &AccessReviewRequest::new(resource, verb)).await
        },
        None,
    );
    Signal::derive(move || loader.value.get() && loader.error.get().is_none())
}
