use serde::{Deserialize, Serialize};

pub const VERB_CREATE: &str = "create";

pub const RESOURCE_APPLICATIONS: &str = "applications";
pub const RESOURCE_COMPONENTS: &str = "components";

/// Read-only verbs are always allowed
pub const READ_VERBS: [&str; 3] = ["get", "list", "watch"];

/// Can the current user perform `verb` on `resource` in the workspace?
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessReviewRequest {
    pub resource: String,
    pub verb: String,
}

impl AccessReviewRequest {
    pub fn new(resource: impl Into<String>, verb: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            verb: verb.into(),
        }
    }

    pub fn is_read(&self) -> bool {
        READ_VERBS.contains(&self.verb.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessReviewResponse {
    pub allowed: bool,
}
