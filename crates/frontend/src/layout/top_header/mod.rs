//! TopHeader component - console top bar with the current workspace.

use crate::routes::paths::applications_path;
use crate::shared::icons::icon;
use crate::system::workspace::{use_workspace, use_workspace_info};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let workspace = use_workspace();
    let info = use_workspace_info();

    let namespace = move || {
        info.value
            .with(|i| i.as_ref().map(|i| i.namespace.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("layers")}
                <span class="top-header__title">"Workspace Console"</span>
            </div>
            <div class="top-header__actions">
                <A href=move || applications_path(&workspace.get())>
                    <span class="top-header__workspace">{move || workspace.get()}</span>
                </A>
                <span class="top-header__namespace" title="Namespace">{namespace}</span>
                {move || info.error.get().map(|_| view! {
                    <span class="top-header__error">"Workspace not found"</span>
                })}
            </div>
        </div>
    }
}
