use super::labels;
use crate::domain::common::{ObjectMeta, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const API_VERSION: &str = "tekton.dev/v1";

// ============================================================================
// Aggregate Root
// ============================================================================

/// A single execution of a CI/CD pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRun {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: PipelineRunSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PipelineRunStatusBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunStatusBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Run outcome derived from the `Succeeded` condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipelineRunStatus {
    Succeeded,
    Failed,
    Cancelled,
    Running,
    Pending,
    Unknown,
}

impl PipelineRunStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
            Self::Running => "Running",
            Self::Pending => "Pending",
            Self::Unknown => "Unknown",
        }
    }
}

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_kind() -> String {
    PipelineRun::KIND.to_string()
}

impl PipelineRun {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: ObjectMeta::new(name, namespace),
            spec: PipelineRunSpec::default(),
            status: None,
        }
    }

    pub fn application(&self) -> Option<&str> {
        self.metadata.label(labels::APPLICATION)
    }

    pub fn component(&self) -> Option<&str> {
        self.metadata.label(labels::COMPONENT)
    }

    pub fn pipeline_type(&self) -> Option<&str> {
        self.metadata.label(labels::PIPELINE_TYPE)
    }

    pub fn param(&self, name: &str) -> Option<&Param> {
        self.spec.params.iter().find(|p| p.name == name)
    }

    /// A test pipeline that ran against a snapshot rather than directly on the image
    pub fn is_snapshot_test(&self) -> bool {
        self.pipeline_type() == Some(labels::PIPELINE_TYPE_TEST)
            && self.param(labels::SNAPSHOT_PARAM).is_some()
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.status.as_ref().and_then(|s| s.start_time)
    }

    pub fn completion_time(&self) -> Option<DateTime<Utc>> {
        self.status.as_ref().and_then(|s| s.completion_time)
    }

    /// Start time if the run started, creation time otherwise
    pub fn sort_time(&self) -> Option<DateTime<Utc>> {
        self.start_time().or(self.metadata.creation_timestamp)
    }

    pub fn duration_seconds(&self) -> Option<i64> {
        let start = self.start_time()?;
        let end = self.completion_time()?;
        Some((end - start).num_seconds().max(0))
    }

    pub fn status(&self) -> PipelineRunStatus {
        let Some(block) = self.status.as_ref() else {
            return PipelineRunStatus::Pending;
        };
        let Some(cond) = block.conditions.iter().find(|c| c.type_ == "Succeeded") else {
            return if block.start_time.is_some() {
                PipelineRunStatus::Running
            } else {
                PipelineRunStatus::Pending
            };
        };
        let reason = cond.reason.as_deref().unwrap_or_default();
        match cond.status.as_str() {
            "True" => PipelineRunStatus::Succeeded,
            "False" if reason.contains("Cancelled") => PipelineRunStatus::Cancelled,
            "False" => PipelineRunStatus::Failed,
            "Unknown" if reason == "Pending" => PipelineRunStatus::Pending,
            "Unknown" => PipelineRunStatus::Running,
            _ => PipelineRunStatus::Unknown,
        }
    }
}

impl Resource for PipelineRun {
    const KIND: &'static str = "PipelineRun";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

/// Query parameters of the pipeline runs list endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineRunsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default)]
    pub exclude_snapshot_tests: bool,
}

impl PipelineRunsQuery {
    pub fn matches(&self, run: &PipelineRun) -> bool {
        if let Some(app) = self.application.as_deref() {
            if run.application() != Some(app) {
                return false;
            }
        }
        if let Some(component) = self.component.as_deref() {
            if run.component() != Some(component) {
                return false;
            }
        }
        !(self.exclude_snapshot_tests && run.is_snapshot_test())
    }
}

/// Newest first: by start time, then creation time, then name
pub fn sort_newest_first(runs: &mut [PipelineRun]) {
    runs.sort_by(|a, b| {
        b.sort_time()
            .cmp(&a.sort_time())
            .then_with(|| a.metadata.name.cmp(&b.metadata.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn run_with_type(name: &str, pipeline_type: &str) -> PipelineRun {
        let mut run = PipelineRun::new(name, "w1-tenant");
        run.metadata
            .labels
            .insert(labels::PIPELINE_TYPE.into(), pipeline_type.into());
        run
    }

    fn snapshot_param() -> Param {
        Param {
            name: labels::SNAPSHOT_PARAM.into(),
            value: serde_json::json!("snapshot-1"),
        }
    }

    #[test]
    fn test_snapshot_test_requires_test_type_and_snapshot_param() {
        let mut test_on_snapshot = run_with_type("t1", "test");
        test_on_snapshot.spec.params.push(snapshot_param());
        assert!(test_on_snapshot.is_snapshot_test());

        // test pipeline run directly on the image
        let test_on_image = run_with_type("t2", "test");
        assert!(!test_on_image.is_snapshot_test());

        let mut build_with_param = run_with_type("b1", "build");
        build_with_param.spec.params.push(snapshot_param());
        assert!(!build_with_param.is_snapshot_test());
    }

    #[test]
    fn test_status_from_conditions() {
        let mut run = PipelineRun::new("r1", "w1-tenant");
        assert_eq!(run.status(), PipelineRunStatus::Pending);

        let condition = |status: &str, reason: &str| Condition {
            type_: "Succeeded".into(),
            status: status.into(),
            reason: Some(reason.into()),
            message: None,
        };

        run.status = Some(PipelineRunStatusBlock {
            conditions: vec![condition("True", "Succeeded")],
            ..Default::default()
        });
        assert_eq!(run.status(), PipelineRunStatus::Succeeded);

        run.status = Some(PipelineRunStatusBlock {
            conditions: vec![condition("False", "PipelineRunCancelled")],
            ..Default::default()
        });
        assert_eq!(run.status(), PipelineRunStatus::Cancelled);

        run.status = Some(PipelineRunStatusBlock {
            conditions: vec![condition("False", "Failed")],
            ..Default::default()
        });
        assert_eq!(run.status(), PipelineRunStatus::Failed);

        run.status = Some(PipelineRunStatusBlock {
            conditions: vec![condition("Unknown", "Running")],
            ..Default::default()
        });
        assert_eq!(run.status(), PipelineRunStatus::Running);
    }

    #[test]
    fn test_sort_newest_first_uses_start_then_creation_time() {
        let mut a = PipelineRun::new("a", "ns");
        a.metadata.creation_timestamp = Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());
        let mut b = PipelineRun::new("b", "ns");
        b.status = Some(PipelineRunStatusBlock {
            start_time: Some(Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap()),
            ..Default::default()
        });
        let c = PipelineRun::new("c", "ns");

        let mut runs = vec![a, c, b];
        sort_newest_first(&mut runs);
        let names: Vec<&str> = runs.iter().map(|r| r.metadata.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duration_seconds() {
        let mut run = PipelineRun::new("r1", "ns");
        run.status = Some(PipelineRunStatusBlock {
            start_time: Some(Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap()),
            completion_time: Some(Utc.with_ymd_and_hms(2024, 3, 2, 10, 2, 5).unwrap()),
            conditions: vec![],
        });
        assert_eq!(run.duration_seconds(), Some(125));
    }

    #[test]
    fn test_query_matches_application_component_and_snapshot_filter() {
        let mut run = run_with_type("t1", "test");
        run.metadata
            .labels
            .insert(labels::APPLICATION.into(), "app1".into());
        run.metadata
            .labels
            .insert(labels::COMPONENT.into(), "c1".into());
        run.spec.params.push(snapshot_param());

        let mut query = PipelineRunsQuery {
            application: Some("app1".into()),
            component: Some("c1".into()),
            exclude_snapshot_tests: false,
        };
        assert!(query.matches(&run));

        query.exclude_snapshot_tests = true;
        assert!(!query.matches(&run));

        query.exclude_snapshot_tests = false;
        query.component = Some("c2".into());
        assert!(!query.matches(&run));
    }
}
