use crate::domain::common::{ObjectMeta, Resource};
use serde::{Deserialize, Serialize};

use crate::domain::a001_application::aggregate::API_VERSION;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Component: a buildable unit (one repository/context) owned by an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: ComponentSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    pub component_name: String,
    pub application: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ComponentSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitSource {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_kind() -> String {
    Component::KIND.to_string()
}

impl Component {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: ObjectMeta::new(name.clone(), namespace),
            spec: ComponentSpec {
                component_name: name,
                application: application.into(),
                ..Default::default()
            },
        }
    }

    pub fn git_url(&self) -> Option<&str> {
        self.spec
            .source
            .as_ref()
            .and_then(|s| s.git.as_ref())
            .map(|g| g.url.as_str())
    }

    pub fn belongs_to(&self, application: &str) -> bool {
        self.spec.application == application
    }
}

/// Query parameters of the components list endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

impl Resource for Component {
    const KIND: &'static str = "Component";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}
