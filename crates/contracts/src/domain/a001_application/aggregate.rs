use crate::domain::common::{ObjectMeta, Resource};
use serde::{Deserialize, Serialize};

pub const API_VERSION: &str = "appstudio.redhat.com/v1alpha1";

// ============================================================================
// Aggregate Root
// ============================================================================

/// Application: a named group of components inside a workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: ApplicationSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    #[serde(default)]
    pub display_name: String,
}

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_kind() -> String {
    Application::KIND.to_string()
}

impl Application {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: ObjectMeta::new(name, namespace),
            spec: ApplicationSpec {
                display_name: display_name.into(),
            },
        }
    }

    /// Display name, or the object name when the display name is empty
    pub fn display_name(&self) -> &str {
        if self.spec.display_name.trim().is_empty() {
            &self.metadata.name
        } else {
            &self.spec.display_name
        }
    }
}

impl Resource for Application {
    const KIND: &'static str = "Application";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_name() {
        let app = Application::new("app1", "w1-tenant", "  ");
        assert_eq!(app.display_name(), "app1");

        let app = Application::new("app1", "w1-tenant", "My App");
        assert_eq!(app.display_name(), "My App");
    }

    #[test]
    fn test_deserialize_fills_kind_and_api_version() {
        let app: Application = serde_json::from_str(
            r#"{"metadata":{"name":"app1","namespace":"w1-tenant"},"spec":{"displayName":"App One"}}"#,
        )
        .unwrap();
        assert_eq!(app.kind, "Application");
        assert_eq!(app.api_version, API_VERSION);
        assert_eq!(app.spec.display_name, "App One");
    }
}
