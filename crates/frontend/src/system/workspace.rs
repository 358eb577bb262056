use crate::shared::api_utils::{get_json, workspace_path};
use crate::shared::loader::{use_loader, Loader};
use contracts::system::workspace::WorkspaceInfo;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Value of a route parameter, empty when the route has none
pub fn use_route_param(name: &'static str) -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| params.read().get(name).unwrap_or_default())
}

/// Name of the workspace the current route belongs to
pub fn use_workspace() -> Memo<String> {
    use_route_param("workspace")
}

pub async fn fetch_workspace_info(workspace: String) -> Result<Option<WorkspaceInfo>, String> {
    get_json::<WorkspaceInfo>(&workspace_path(&workspace, ""))
        .await
        .map(Some)
}

pub fn use_workspace_info() -> Loader<Option<WorkspaceInfo>> {
    let workspace = use_workspace();
    use_loader(
        move || Some(workspace.get()).filter(|w| !w.is_empty()),
        fetch_workspace_info,
        None,
    )
}
