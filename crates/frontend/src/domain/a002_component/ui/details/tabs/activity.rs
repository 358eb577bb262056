//! Activity tab of a component: commits and pipeline runs.
//!
//! The secondary tab lives in the route (`.../activity/{tab}`) and is
//! remembered per component in local storage. `TabController` keeps the two
//! in step; this view only feeds it the route, the storage key and the
//! user's clicks.

use crate::domain::a003_pipeline_run::ui::list::PipelineRunsList;
use crate::projections::p900_commits::ui::list::CommitsList;
use crate::routes::paths::component_activity_path;
use crate::shared::components::details_section::DetailsSection;
use crate::shared::navigation::RouterNavigator;
use crate::shared::storage::BrowserStorage;
use crate::shared::tab_state::{scoped_key, TabController, TabSelection, TabSet};
use crate::system::workspace::{use_route_param, use_workspace};
use contracts::domain::a002_component::aggregate::Component;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

pub const TAB_COMMITS: &str = "latest-commits";
pub const TAB_PIPELINE_RUNS: &str = "pipelineruns";

pub const ACTIVITY_TABS: TabSet = TabSet::new(&[TAB_COMMITS, TAB_PIPELINE_RUNS], TAB_COMMITS);

const STORAGE_SUFFIX: &str = "activity-secondary-tab";

const DESCRIPTION: &str = "Monitor CI/CD activity for this component. Each item in the list \
    represents a process that was started by a user, generated a snapshot, and released.";

/// Preference key for the component named in the route, `None` until it has
/// loaded. A component still loaded from the previous route does not count.
pub fn activity_storage_key(loaded: Option<&Component>, route_component: &str) -> Option<String> {
    let scope = loaded
        .filter(|c| c.metadata.name == route_component)
        .map(|c| c.spec.component_name.as_str());
    scoped_key(scope, STORAGE_SUFFIX)
}

/// Runs one step of the controller over the stored selection and returns the
/// resolved tab afterwards.
fn step<F>(
    selection: StoredValue<TabSelection>,
    navigate: F,
    f: impl FnOnce(&mut TabController<BrowserStorage, RouterNavigator<F>>),
) -> &'static str
where
    F: Fn(&str, NavigateOptions),
{
    let mut controller = TabController::new(
        selection.get_value(),
        BrowserStorage,
        RouterNavigator(navigate),
    );
    f(&mut controller);
    let current = controller.current();
    selection.set_value(controller.into_selection());
    current
}

#[component]
pub fn ActivityTab(#[prop(into)] component: Signal<Option<Component>>) -> impl IntoView {
    let workspace = use_workspace();
    let application_name = use_route_param("application");
    let component_name = use_route_param("component");
    let route_tab = Memo::new({
        let tab = use_route_param("tab");
        move |_| Some(tab.get()).filter(|t| !t.is_empty())
    });
    let navigate = use_navigate();

    let selection = StoredValue::new(TabSelection::new(ACTIVITY_TABS));
    let current = RwSignal::new(ACTIVITY_TABS.default_tab());
    let selected_value = RwSignal::new(ACTIVITY_TABS.default_tab().to_string());

    // route or owning component changed
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            let name = component_name.get();
            let base_path = component_activity_path(&workspace.get(), &application_name.get(), &name);
            let storage_key = component.with(|c| activity_storage_key(c.as_ref(), &name));
            let tab = route_tab.get();

            let resolved = step(selection, navigate.clone(), |c| {
                c.observe(base_path, tab, storage_key)
            });
            current.set(resolved);
            if selected_value.get_untracked() != resolved {
                selected_value.set(resolved.to_string());
            }
        }
    });

    // user picked a tab
    Effect::new(move |_| {
        let picked = selected_value.get();
        if picked == current.get_untracked() {
            return;
        }
        let resolved = step(selection, navigate.clone(), |c| c.activate(&picked));
        current.set(resolved);
    });

    view! {
        <DetailsSection title="Activity" description=DESCRIPTION>
            <TabList selected_value=selected_value>
                <Tab value=TAB_COMMITS>"Commits"</Tab>
                <Tab value=TAB_PIPELINE_RUNS>"Pipeline runs"</Tab>
            </TabList>
            <div class="activity__content" style="padding-top: var(--spacing-lg);">
                {move || match current.get() {
                    TAB_PIPELINE_RUNS => view! {
                        <PipelineRunsList application=application_name component=component_name />
                    }.into_any(),
                    _ => view! {
                        <CommitsList application=application_name component=component_name />
                    }.into_any(),
                }}
            </div>
        </DetailsSection>
    }
}
