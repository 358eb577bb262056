use crate::shared::data::store::{StoreError, WorkspaceStore};
use contracts::domain::a001_application::aggregate::Application;
use contracts::domain::common::Resource;

/// Applications of a workspace, sorted by name
pub fn list_all(store: &WorkspaceStore, workspace: &str) -> Result<Vec<Application>, StoreError> {
    Ok(store.workspace(workspace)?.applications.clone())
}

pub fn get_by_name(
    store: &WorkspaceStore,
    workspace: &str,
    name: &str,
) -> Result<Application, StoreError> {
    store
        .workspace(workspace)?
        .applications
        .iter()
        .find(|a| a.metadata.name == name)
        .cloned()
        .ok_or_else(|| StoreError::NotFound {
            kind: Application::KIND,
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::store::test_support::test_store;

    #[test]
    fn test_list_and_get() {
        let store = test_store();
        let apps = list_all(&store, "w1").unwrap();
        assert_eq!(apps.len(), 2);

        let app = get_by_name(&store, "w1", "app2").unwrap();
        assert_eq!(app.spec.display_name, "Second");

        assert!(matches!(
            get_by_name(&store, "w1", "missing"),
            Err(StoreError::NotFound { kind: "Application", .. })
        ));
    }
}
