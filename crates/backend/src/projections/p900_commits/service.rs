use crate::shared::data::store::{StoreError, WorkspaceStore};
use contracts::domain::a003_pipeline_run::aggregate::PipelineRun;
use contracts::projections::p900_commits::builder::{derive_commits, filter_by_component};
use contracts::projections::p900_commits::dto::{Commit, CommitsQuery};

/// Commits of the workspace derived from its build pipeline runs
pub fn list(
    store: &WorkspaceStore,
    workspace: &str,
    query: &CommitsQuery,
) -> Result<Vec<Commit>, StoreError> {
    let runs: Vec<PipelineRun> = store
        .workspace(workspace)?
        .pipeline_runs
        .iter()
        .filter(|r| match query.application.as_deref() {
            Some(app) => r.application() == Some(app),
            None => true,
        })
        .cloned()
        .collect();

    let commits = derive_commits(&runs);
    Ok(match query.component.as_deref() {
        Some(component) => filter_by_component(commits, component),
        None => commits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::store::test_support::test_store;

    #[test]
    fn test_commits_of_component() {
        let store = test_store();
        let query = CommitsQuery {
            application: Some("app1".into()),
            component: Some("c1".into()),
        };
        let commits = list(&store, "w1", &query).unwrap();
        let shas: Vec<&str> = commits.iter().map(|c| c.sha.as_str()).collect();
        assert_eq!(shas, vec!["2222222222", "1111111111"]);
        // sha 2222 was built for both components
        assert_eq!(commits[0].components, vec!["c2", "c1"]);
    }

    #[test]
    fn test_unknown_workspace() {
        let store = test_store();
        assert!(list(&store, "missing", &CommitsQuery::default()).is_err());
    }
}
