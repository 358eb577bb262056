use crate::shared::api_utils::{get_json, workspace_path};
use crate::shared::loader::{use_loader, Loader};
use contracts::domain::a001_application::aggregate::Application;
use leptos::prelude::*;
use urlencoding::encode;

pub async fn fetch_applications(workspace: String) -> Result<Vec<Application>, String> {
    get_json(&workspace_path(&workspace, "applications")).await
}

pub async fn fetch_application(
    workspace: String,
    name: String,
) -> Result<Option<Application>, String> {
    let path = workspace_path(&workspace, &format!("applications/{}", encode(&name)));
    get_json::<Application>(&path).await.map(Some)
}

pub fn use_applications(workspace: Memo<String>) -> Loader<Vec<Application>> {
    use_loader(
        move || Some(workspace.get()).filter(|w| !w.is_empty()),
        fetch_applications,
        None,
    )
}

pub fn use_application(workspace: Memo<String>, name: Memo<String>) -> Loader<Option<Application>> {
    use_loader(
        move || {
            let (ws, name) = (workspace.get(), name.get());
            (!ws.is_empty() && !name.is_empty()).then_some((ws, name))
        },
        |(ws, name)| fetch_application(ws, name),
        None,
    )
}
