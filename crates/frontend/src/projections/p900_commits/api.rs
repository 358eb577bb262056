use crate::shared::api_utils::{get_json, with_query, workspace_path};
use crate::shared::loader::{use_loader, Loader, POLL_INTERVAL_MS};
use contracts::projections::p900_commits::dto::{Commit, CommitsQuery};
use leptos::prelude::*;

pub async fn fetch_commits(workspace: String, query: CommitsQuery) -> Result<Vec<Commit>, String> {
    get_json(&with_query(&workspace_path(&workspace, "commits"), &query)).await
}

pub fn use_commits(
    workspace: Memo<String>,
    application: Memo<String>,
    component: Memo<String>,
) -> Loader<Vec<Commit>> {
    use_loader(
        move || {
            let ws = workspace.get();
            let query = CommitsQuery {
                application: Some(application.get()).filter(|a| !a.is_empty()),
                component: Some(component.get()).filter(|c| !c.is_empty()),
            };
            (!ws.is_empty()).then_some((ws, query))
        },
        |(ws, query)| fetch_commits(ws, query),
        Some(POLL_INTERVAL_MS),
    )
}
