use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A source commit as seen through the build pipeline runs it triggered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    pub sha: String,
    pub sha_title: String,
    pub branch: String,
    pub application: String,
    pub components: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request_number: Option<String>,
    pub is_pull_request: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha_url: Option<String>,
    pub pipeline_runs: Vec<String>,
}

impl Commit {
    pub fn short_sha(&self) -> &str {
        let end = self
            .sha
            .char_indices()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(self.sha.len());
        &self.sha[..end]
    }

    pub fn includes_component(&self, component: &str) -> bool {
        self.components.iter().any(|c| c == component)
    }
}

/// Query parameters of the commits endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}
