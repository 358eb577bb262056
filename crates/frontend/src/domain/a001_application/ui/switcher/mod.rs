//! Dropdown for moving between the applications of a workspace.

pub mod model;

use super::super::api::use_applications;
use crate::routes::paths::{applications_path, import_path};
use crate::shared::components::access_button::ButtonWithAccessTooltip;
use crate::shared::components::context_switcher::ContextSwitcher;
use crate::system::access::use_access_review;
use crate::system::workspace::use_workspace;
use contracts::system::access::{RESOURCE_APPLICATIONS, RESOURCE_COMPONENTS, VERB_CREATE};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use model::{can_create, is_visible, menu_items, select_target, CREATE_DENIED_TOOLTIP};

#[component]
pub fn ApplicationSwitcher(
    #[prop(into)] selected_application: Signal<Option<String>>,
) -> impl IntoView {
    let workspace = use_workspace();
    let applications = use_applications(workspace);
    let navigate = use_navigate();

    let can_create_applications = use_access_review(workspace, RESOURCE_APPLICATIONS, VERB_CREATE);
    let can_create_components = use_access_review(workspace, RESOURCE_COMPONENTS, VERB_CREATE);
    let allowed = Signal::derive(move || {
        can_create(can_create_applications.get(), can_create_components.get())
    });

    let items = Memo::new(move |_| applications.value.with(|apps| menu_items(apps)));
    let selected = Signal::derive(move || selected_application.get().unwrap_or_default());

    let on_select = {
        let navigate = navigate.clone();
        move |key: String| {
            let ws = workspace.get_untracked();
            if let Some(path) =
                select_target(&ws, selected_application.get_untracked().as_deref(), &key)
            {
                navigate(&path, Default::default());
            }
        }
    };

    let footer = move || {
        let navigate = navigate.clone();
        let ws = workspace.get_untracked();
        let create_path = import_path(&ws);
        view! {
            <ButtonWithAccessTooltip
                allowed=allowed
                tooltip=CREATE_DENIED_TOOLTIP
                on_click=move |_| navigate(&create_path, Default::default())
            >
                "Create application"
            </ButtonWithAccessTooltip>
            <A href=applications_path(&ws)>"View applications list"</A>
        }
    };

    view! {
        <Show when=move || items.with(|items| is_visible(items))>
            <ContextSwitcher
                items=Signal::derive(move || items.get())
                selected=selected
                on_select=on_select.clone()
                footer=footer.clone()
            />
        </Show>
    }
}
