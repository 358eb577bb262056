use super::super::api::use_application;
use super::switcher::ApplicationSwitcher;
use crate::domain::a002_component::api::use_components;
use crate::domain::a002_component::ui::details::tabs::activity::TAB_PIPELINE_RUNS;
use crate::routes::paths::{component_activity_path, component_activity_tab_path};
use crate::shared::components::details_section::DetailsSection;
use crate::system::workspace::{use_route_param, use_workspace};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn ApplicationDetailsPage() -> impl IntoView {
    let workspace = use_workspace();
    let application_name = use_route_param("application");
    let application = use_application(workspace, application_name);
    let components = use_components(workspace, application_name);

    let title = move || {
        application
            .value
            .with(|app| app.as_ref().map(|a| a.display_name().to_string()))
            .unwrap_or_else(|| application_name.get())
    };

    view! {
        <div id="a001_application--detail" class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <ApplicationSwitcher
                        selected_application=Signal::derive(move || Some(application_name.get()))
                    />
                </div>
            </div>
            <div class="page__content">
                {move || application.error.get().map(|e| view! {
                    <div class="error-box">{e}</div>
                })}
                <DetailsSection title="Components">
                    <Show
                        when=move || components.loaded.get()
                        fallback=|| view! { <Spinner /> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                                    <TableHeaderCell min_width=250.0>"Source"</TableHeaderCell>
                                    <TableHeaderCell min_width=200.0>"Image"</TableHeaderCell>
                                    <TableHeaderCell min_width=120.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || components.value.get()
                                    key=|c| c.metadata.name.clone()
                                    children=move |c| {
                                        let ws = workspace.get_untracked();
                                        let app = application_name.get_untracked();
                                        let activity = component_activity_path(&ws, &app, &c.metadata.name);
                                        let runs = component_activity_tab_path(&ws, &app, &c.metadata.name, TAB_PIPELINE_RUNS);
                                        let source = c.git_url().unwrap_or("-").to_string();
                                        let image = c.spec.container_image.clone().unwrap_or_else(|| "-".to_string());
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <A href=activity>{c.spec.component_name.clone()}</A>
                                                </TableCell>
                                                <TableCell>{source}</TableCell>
                                                <TableCell>{image}</TableCell>
                                                <TableCell>
                                                    <A href=runs>"Pipeline runs"</A>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </Show>
                </DetailsSection>
            </div>
        </div>
    }
}
