use crate::shared::data::store::{StoreError, WorkspaceStore};
use contracts::domain::a003_pipeline_run::aggregate::{
    sort_newest_first, PipelineRun, PipelineRunsQuery,
};

/// Pipeline runs matching the query, newest first
pub fn list(
    store: &WorkspaceStore,
    workspace: &str,
    query: &PipelineRunsQuery,
) -> Result<Vec<PipelineRun>, StoreError> {
    let mut runs: Vec<PipelineRun> = store
        .workspace(workspace)?
        .pipeline_runs
        .iter()
        .filter(|r| query.matches(r))
        .cloned()
        .collect();
    sort_newest_first(&mut runs);
    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::store::test_support::test_store;

    fn names(runs: Vec<PipelineRun>) -> Vec<String> {
        runs.into_iter().map(|r| r.metadata.name).collect()
    }

    #[test]
    fn test_component_runs_newest_first() {
        let store = test_store();
        let query = PipelineRunsQuery {
            application: Some("app1".into()),
            component: Some("c1".into()),
            exclude_snapshot_tests: false,
        };
        assert_eq!(
            names(list(&store, "w1", &query).unwrap()),
            vec!["app1-snapshot-test", "c1-build-2", "c1-build-1"]
        );
    }

    #[test]
    fn test_excludes_snapshot_tests() {
        let store = test_store();
        let query = PipelineRunsQuery {
            application: Some("app1".into()),
            component: Some("c1".into()),
            exclude_snapshot_tests: true,
        };
        assert_eq!(
            names(list(&store, "w1", &query).unwrap()),
            vec!["c1-build-2", "c1-build-1"]
        );
    }
}
