use crate::domain::a001_application::ui::details::ApplicationDetailsPage;
use crate::domain::a001_application::ui::list::ApplicationsListPage;
use crate::domain::a002_component::ui::details::ComponentDetailsPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Page not found"</h1>
            </div>
            <div class="page__content">
                "Open a workspace at /workspaces/{name}/applications."
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <ParentRoute path=path!("/workspaces/:workspace") view=Shell>
                    <Route path=path!("applications") view=ApplicationsListPage />
                    <Route path=path!("applications/:application") view=ApplicationDetailsPage />
                    <Route
                        path=path!("applications/:application/components/:component/activity")
                        view=ComponentDetailsPage
                    />
                    <Route
                        path=path!("applications/:application/components/:component/activity/:tab")
                        view=ComponentDetailsPage
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
