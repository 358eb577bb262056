//! Seed file format: every workspace with its resources

use contracts::domain::a001_application::aggregate::Application;
use contracts::domain::a002_component::aggregate::Component;
use contracts::domain::a003_pipeline_run::aggregate::PipelineRun;
use serde::Deserialize;
use std::path::Path;

use super::store::StoreError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    #[serde(default)]
    pub workspaces: Vec<WorkspaceSeed>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSeed {
    pub name: String,
    /// Defaults to `{name}-tenant`
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub pipeline_runs: Vec<PipelineRun>,
}

impl WorkspaceSeed {
    pub fn namespace(&self) -> String {
        self.namespace
            .clone()
            .unwrap_or_else(|| format!("{}-tenant", self.name))
    }
}

pub fn parse_seed(contents: &str, origin: &str) -> Result<Seed, StoreError> {
    serde_json::from_str(contents).map_err(|source| StoreError::SeedParse {
        path: origin.to_string(),
        source,
    })
}

pub fn load_seed(path: &Path) -> Result<Seed, StoreError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| StoreError::SeedIo {
        path: display.clone(),
        source,
    })?;
    parse_seed(&contents, &display)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED_SEED: &str = include_str!("../../../../../data/workspaces.json");

    #[test]
    fn test_shipped_seed_parses() {
        let seed = parse_seed(SHIPPED_SEED, "data/workspaces.json").unwrap();
        assert!(!seed.workspaces.is_empty());
        assert!(seed
            .workspaces
            .iter()
            .all(|ws| !ws.applications.is_empty()));
    }

    #[test]
    fn test_namespace_defaults_to_tenant_suffix() {
        let ws = WorkspaceSeed {
            name: "team-a".into(),
            ..Default::default()
        };
        assert_eq!(ws.namespace(), "team-a-tenant");
    }

    #[test]
    fn test_missing_seed_file_is_reported() {
        let err = load_seed(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, StoreError::SeedIo { .. }));
    }
}
