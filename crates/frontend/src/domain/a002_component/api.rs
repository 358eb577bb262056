use crate::shared::api_utils::{get_json, with_query, workspace_path};
use crate::shared::loader::{use_loader, Loader};
use contracts::domain::a002_component::aggregate::{Component, ComponentsQuery};
use leptos::prelude::*;
use urlencoding::encode;

pub async fn fetch_components(
    workspace: String,
    application: Option<String>,
) -> Result<Vec<Component>, String> {
    let path = with_query(
        &workspace_path(&workspace, "components"),
        &ComponentsQuery { application },
    );
    get_json(&path).await
}

pub async fn fetch_component(workspace: String, name: String) -> Result<Option<Component>, String> {
    let path = workspace_path(&workspace, &format!("components/{}", encode(&name)));
    get_json::<Component>(&path).await.map(Some)
}

/// Components of `application`, or of the whole workspace when it is empty
pub fn use_components(workspace: Memo<String>, application: Memo<String>) -> Loader<Vec<Component>> {
    use_loader(
        move || {
            let ws = workspace.get();
            let app = Some(application.get()).filter(|a| !a.is_empty());
            (!ws.is_empty()).then_some((ws, app))
        },
        |(ws, app)| fetch_components(ws, app),
        None,
    )
}

pub fn use_component(workspace: Memo<String>, name: Memo<String>) -> Loader<Option<Component>> {
    use_loader(
        move || {
            let (ws, name) = (workspace.get(), name.get());
            (!ws.is_empty() && !name.is_empty()).then_some((ws, name))
        },
        |(ws, name)| fetch_component(ws, name),
        None,
    )
}
