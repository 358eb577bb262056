use crate::shared::api_utils::{get_json, with_query, workspace_path};
use crate::shared::loader::{use_loader, Loader, POLL_INTERVAL_MS};
use contracts::domain::a003_pipeline_run::aggregate::{PipelineRun, PipelineRunsQuery};
use leptos::prelude::*;

pub async fn fetch_pipeline_runs(
    workspace: String,
    query: PipelineRunsQuery,
) -> Result<Vec<PipelineRun>, String> {
    get_json(&with_query(&workspace_path(&workspace, "pipelineruns"), &query)).await
}

/// Pipeline runs of a component, newest first, refreshed periodically.
/// Tests run against snapshots are left out.
pub fn use_pipeline_runs(
    workspace: Memo<String>,
    application: Memo<String>,
    component: Memo<String>,
) -> Loader<Vec<PipelineRun>> {
    use_loader(
        move || {
            let ws = workspace.get();
            let query = PipelineRunsQuery {
                application: Some(application.get()).filter(|a| !a.is_empty()),
                component: Some(component.get()).filter(|c| !c.is_empty()),
                exclude_snapshot_tests: true,
            };
            (!ws.is_empty()).then_some((ws, query))
        },
        |(ws, query)| fetch_pipeline_runs(ws, query),
        Some(POLL_INTERVAL_MS),
    )
}
