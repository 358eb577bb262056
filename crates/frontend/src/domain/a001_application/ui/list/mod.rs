use super::super::api::use_applications;
use crate::domain::a002_component::api::use_components;
use crate::routes::paths::application_path;
use crate::system::workspace::use_workspace;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn ApplicationsListPage() -> impl IntoView {
    let workspace = use_workspace();
    let applications = use_applications(workspace);
    let components = use_components(workspace, Memo::new(|_| String::new()));

    let component_count = move |app: &str| {
        components
            .value
            .with(|list| list.iter().filter(|c| c.belongs_to(app)).count())
    };

    view! {
        <div id="a001_application--list" class="page">
            <div class="page__header">
                <h1 class="page__title">"Applications"</h1>
            </div>
            <div class="page__content">
                {move || applications.error.get().map(|e| view! {
                    <div class="error-box">{e}</div>
                })}
                <Show
                    when=move || applications.loaded.get()
                    fallback=|| view! { <Spinner /> }
                >
                    <Show
                        when=move || applications.value.with(|apps| !apps.is_empty())
                        fallback=|| view! { <div class="empty-state">"No applications"</div> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=200.0>"Name"</TableHeaderCell>
                                    <TableHeaderCell min_width=150.0>"Resource name"</TableHeaderCell>
                                    <TableHeaderCell min_width=100.0>"Components"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || applications.value.get()
                                    key=|app| app.metadata.name.clone()
                                    children=move |app| {
                                        let name = app.metadata.name.clone();
                                        let href = application_path(&workspace.get_untracked(), &name);
                                        let count = {
                                            let name = name.clone();
                                            move || component_count(&name)
                                        };
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <A href=href>{app.display_name().to_string()}</A>
                                                </TableCell>
                                                <TableCell>{name}</TableCell>
                                                <TableCell>{count}</TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
