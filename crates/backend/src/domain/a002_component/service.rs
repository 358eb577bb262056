use crate::shared::data::store::{StoreError, WorkspaceStore};
use contracts::domain::a002_component::aggregate::{Component, ComponentsQuery};
use contracts::domain::common::Resource;

/// Components of a workspace, optionally limited to one application
pub fn list(
    store: &WorkspaceStore,
    workspace: &str,
    query: &ComponentsQuery,
) -> Result<Vec<Component>, StoreError> {
    let components = &store.workspace(workspace)?.components;
    Ok(match query.application.as_deref() {
        Some(app) => components
            .iter()
            .filter(|c| c.belongs_to(app))
            .cloned()
            .collect(),
        None => components.clone(),
    })
}

pub fn get_by_name(
    store: &WorkspaceStore,
    workspace: &str,
    name: &str,
) -> Result<Component, StoreError> {
    store
        .workspace(workspace)?
        .components
        .iter()
        .find(|c| c.metadata.name == name)
        .cloned()
        .ok_or_else(|| StoreError::NotFound {
            kind: Component::KIND,
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::store::test_support::test_store;

    #[test]
    fn test_list_by_application() {
        let store = test_store();

        let all = list(&store, "w1", &ComponentsQuery::default()).unwrap();
        assert_eq!(all.len(), 3);

        let query = ComponentsQuery {
            application: Some("app1".into()),
        };
        let names: Vec<String> = list(&store, "w1", &query)
            .unwrap()
            .into_iter()
            .map(|c| c.metadata.name)
            .collect();
        assert_eq!(names, vec!["c1", "c2"]);
    }

    #[test]
    fn test_get_by_name() {
        let store = test_store();
        assert_eq!(get_by_name(&store, "w1", "c3").unwrap().spec.application, "app2");
        assert!(get_by_name(&store, "w2", "c3").is_err());
    }
}
