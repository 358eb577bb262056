use crate::routes::paths::application_path;
use crate::shared::components::context_switcher::SwitcherItem;
use contracts::domain::a001_application::aggregate::Application;

pub const CREATE_DENIED_TOOLTIP: &str = "You don't have access to create an application";

pub fn menu_items(applications: &[Application]) -> Vec<SwitcherItem> {
    applications
        .iter()
        .map(|app| SwitcherItem {
            key: app.metadata.name.clone(),
            name: app.display_name().to_string(),
        })
        .collect()
}

/// Switching only makes sense with somewhere else to go
pub fn is_visible(items: &[SwitcherItem]) -> bool {
    items.len() > 1
}

/// Path to navigate to when `key` is picked, `None` when it is already shown
pub fn select_target(workspace: &str, selected: Option<&str>, key: &str) -> Option<String> {
    if selected == Some(key) {
        None
    } else {
        Some(application_path(workspace, key))
    }
}

/// Creating an application also creates its first component
pub fn can_create(create_applications: bool, create_components: bool) -> bool {
    create_applications && create_components
}
