//! Component details page: header plus the activity panel.

use super::super::super::api::use_component;
use super::tabs::ActivityTab;
use crate::routes::paths::application_path;
use crate::system::workspace::{use_route_param, use_workspace};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn ComponentDetailsPage() -> impl IntoView {
    let workspace = use_workspace();
    let application_name = use_route_param("application");
    let component_name = use_route_param("component");
    let component = use_component(workspace, component_name);

    let title = move || {
        component
            .value
            .with(|c| c.as_ref().map(|c| c.spec.component_name.clone()))
            .unwrap_or_else(|| component_name.get())
    };
    let source = move || {
        component
            .value
            .with(|c| c.as_ref().and_then(|c| c.git_url().map(str::to_string)))
    };

    view! {
        <div id="a002_component--detail" class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Show when=move || !component.loaded.get()>
                        <Spinner size=SpinnerSize::Tiny />
                    </Show>
                </div>
                <div class="page__header-right">
                    <A href=move || application_path(&workspace.get(), &application_name.get())>
                        {move || application_name.get()}
                    </A>
                </div>
            </div>
            {move || source().map(|url| view! {
                <div class="page__subtitle">{url}</div>
            })}
            {move || component.error.get().map(|e| view! {
                <div class="error-box">{e}</div>
            })}
            <div class="page__content">
                <ActivityTab component=Signal::derive(move || component.value.get()) />
            </div>
        </div>
    }
}
