//! Console route paths

use urlencoding::encode;

pub fn applications_path(workspace: &str) -> String {
    format!("/workspaces/{}/applications", encode(workspace))
}

pub fn application_path(workspace: &str, application: &str) -> String {
    format!(
        "/workspaces/{}/applications/{}",
        encode(workspace),
        encode(application)
    )
}

/// Activity panel of a component, without the tab segment
pub fn component_activity_path(workspace: &str, application: &str, component: &str) -> String {
    format!(
        "{}/components/{}/activity",
        application_path(workspace, application),
        encode(component)
    )
}

pub fn component_activity_tab_path(
    workspace: &str,
    application: &str,
    component: &str,
    tab: &str,
) -> String {
    format!(
        "{}/{}",
        component_activity_path(workspace, application, component),
        encode(tab)
    )
}

pub fn import_path(workspace: &str) -> String {
    format!("/workspaces/{}/import", encode(workspace))
}
