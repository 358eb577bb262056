use contracts::domain::a001_application::aggregate::Application;
use contracts::domain::a002_component::aggregate::Component;
use contracts::domain::a003_pipeline_run::aggregate::PipelineRun;
use contracts::system::workspace::WorkspaceInfo;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use thiserror::Error;

use super::seed::Seed;

static STORE: OnceCell<WorkspaceStore> = OnceCell::new();

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("workspace store is not initialized")]
    NotInitialized,

    #[error("workspace not found: {0}")]
    WorkspaceNotFound(String),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("failed to read seed file {path}: {source}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file {path}: {source}")]
    SeedParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Resources of one workspace
#[derive(Debug, Clone, Default)]
pub struct WorkspaceResources {
    pub info: WorkspaceInfo,
    pub applications: Vec<Application>,
    pub components: Vec<Component>,
    pub pipeline_runs: Vec<PipelineRun>,
}

/// Immutable in-memory view of all workspaces, built once at startup
#[derive(Debug, Clone, Default)]
pub struct WorkspaceStore {
    workspaces: HashMap<String, WorkspaceResources>,
}

impl WorkspaceStore {
    pub fn from_seed(seed: Seed) -> Self {
        let mut workspaces = HashMap::new();

        for ws in seed.workspaces {
            let namespace = ws.namespace();
            let mut resources = WorkspaceResources {
                info: WorkspaceInfo {
                    name: ws.name.clone(),
                    namespace: namespace.clone(),
                },
                applications: ws.applications,
                components: ws.components,
                pipeline_runs: ws.pipeline_runs,
            };

            // resources without a namespace inherit the workspace one
            for app in resources.applications.iter_mut() {
                if app.metadata.namespace.is_empty() {
                    app.metadata.namespace = namespace.clone();
                }
            }
            for component in resources.components.iter_mut() {
                if component.metadata.namespace.is_empty() {
                    component.metadata.namespace = namespace.clone();
                }
            }
            for run in resources.pipeline_runs.iter_mut() {
                if run.metadata.namespace.is_empty() {
                    run.metadata.namespace = namespace.clone();
                }
            }

            resources
                .applications
                .sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));
            resources
                .components
                .sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));

            workspaces.insert(ws.name, resources);
        }

        Self { workspaces }
    }

    pub fn workspace(&self, name: &str) -> Result<&WorkspaceResources, StoreError> {
        self.workspaces
            .get(name)
            .ok_or_else(|| StoreError::WorkspaceNotFound(name.to_string()))
    }

    pub fn workspace_count(&self) -> usize {
        self.workspaces.len()
    }
}

pub fn initialize_store(store: WorkspaceStore) -> anyhow::Result<()> {
    STORE
        .set(store)
        .map_err(|_| anyhow::anyhow!("workspace store already initialized"))
}

pub fn get_store() -> Result<&'static WorkspaceStore, StoreError> {
    STORE.get().ok_or(StoreError::NotInitialized)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::shared::data::seed::parse_seed;

    pub const TEST_SEED: &str = r#"{
        "workspaces": [
            {
                "name": "w1",
                "applications": [
                    {"metadata": {"name": "app2"}, "spec": {"displayName": "Second"}},
                    {"metadata": {"name": "app1"}, "spec": {"displayName": "First"}}
                ],
                "components": [
                    {"metadata": {"name": "c2"}, "spec": {"componentName": "c2", "application": "app1"}},
                    {"metadata": {"name": "c1"}, "spec": {"componentName": "c1", "application": "app1"}},
                    {"metadata": {"name": "c3"}, "spec": {"componentName": "c3", "application": "app2"}}
                ],
                "pipelineRuns": [
                    {
                        "metadata": {
                            "name": "c1-build-1",
                            "creationTimestamp": "2024-05-01T10:00:00Z",
                            "labels": {
                                "appstudio.openshift.io/application": "app1",
                                "appstudio.openshift.io/component": "c1",
                                "pipelines.appstudio.openshift.io/type": "build",
                                "pipelinesascode.tekton.dev/sha": "1111111111"
                            }
                        },
                        "status": {"startTime": "2024-05-01T10:00:05Z"}
                    },
                    {
                        "metadata": {
                            "name": "c1-build-2",
                            "creationTimestamp": "2024-05-02T10:00:00Z",
                            "labels": {
                                "appstudio.openshift.io/application": "app1",
                                "appstudio.openshift.io/component": "c1",
                                "pipelines.appstudio.openshift.io/type": "build",
                                "pipelinesascode.tekton.dev/sha": "2222222222"
                            }
                        },
                        "status": {"startTime": "2024-05-02T10:00:05Z"}
                    },
                    {
                        "metadata": {
                            "name": "app1-snapshot-test",
                            "creationTimestamp": "2024-05-02T11:00:00Z",
                            "labels": {
                                "appstudio.openshift.io/application": "app1",
                                "appstudio.openshift.io/component": "c1",
                                "pipelines.appstudio.openshift.io/type": "test"
                            }
                        },
                        "spec": {"params": [{"name": "SNAPSHOT", "value": "app1-snapshot"}]}
                    },
                    {
                        "metadata": {
                            "name": "c2-build-1",
                            "creationTimestamp": "2024-05-03T10:00:00Z",
                            "labels": {
                                "appstudio.openshift.io/application": "app1",
                                "appstudio.openshift.io/component": "c2",
                                "pipelines.appstudio.openshift.io/type": "build",
                                "pipelinesascode.tekton.dev/sha": "2222222222"
                            }
                        }
                    }
                ]
            },
            {
                "name": "w2",
                "namespace": "custom-ns",
                "applications": [
                    {"metadata": {"name": "solo"}, "spec": {"displayName": "Solo"}}
                ]
            }
        ]
    }"#;

    pub fn test_store() -> WorkspaceStore {
        WorkspaceStore::from_seed(parse_seed(TEST_SEED, "test").unwrap())
    }

    /// Installs the test store as the process-wide store (first caller wins)
    pub fn install_test_store() -> &'static WorkspaceStore {
        STORE.get_or_init(test_store)
    }
}
