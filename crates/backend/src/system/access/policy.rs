//! Boolean access gate consumed by the console UI.
//!
//! Read verbs are always allowed; every other verb is denied in read-only
//! workspaces and allowed elsewhere.

use crate::shared::config::AccessConfig;
use contracts::system::access::{AccessReviewRequest, AccessReviewResponse};
use once_cell::sync::OnceCell;
use std::collections::HashSet;

static POLICY: OnceCell<AccessPolicy> = OnceCell::new();

#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    read_only_workspaces: HashSet<String>,
}

impl AccessPolicy {
    pub fn from_config(config: &AccessConfig) -> Self {
        Self {
            read_only_workspaces: config.read_only_workspaces.iter().cloned().collect(),
        }
    }

    pub fn review(&self, workspace: &str, request: &AccessReviewRequest) -> AccessReviewResponse {
        let allowed = request.is_read() || !self.read_only_workspaces.contains(workspace);
        tracing::debug!(
            "access review: workspace={} resource={} verb={} allowed={}",
            workspace,
            request.resource,
            request.verb,
            allowed
        );
        AccessReviewResponse { allowed }
    }
}

pub fn initialize_policy(policy: AccessPolicy) -> anyhow::Result<()> {
    POLICY
        .set(policy)
        .map_err(|_| anyhow::anyhow!("access policy already initialized"))
}

/// Process-wide policy; permissive default when never initialized
pub fn get_policy() -> &'static AccessPolicy {
    POLICY.get_or_init(AccessPolicy::default)
}

/// Installs the policy used by handler tests: `w2` is read-only
#[cfg(test)]
pub(crate) fn install_test_policy() -> &'static AccessPolicy {
    POLICY.get_or_init(|| {
        AccessPolicy::from_config(&AccessConfig {
            read_only_workspaces: vec!["w2".into()],
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::access::{RESOURCE_APPLICATIONS, VERB_CREATE};

    fn policy() -> AccessPolicy {
        AccessPolicy::from_config(&AccessConfig {
            read_only_workspaces: vec!["w2".into()],
        })
    }

    #[test]
    fn test_read_verbs_always_allowed() {
        let request = AccessReviewRequest::new(RESOURCE_APPLICATIONS, "list");
        assert!(policy().review("w2", &request).allowed);
        assert!(policy().review("w1", &request).allowed);
    }

    #[test]
    fn test_create_denied_only_in_read_only_workspace() {
        let request = AccessReviewRequest::new(RESOURCE_APPLICATIONS, VERB_CREATE);
        assert!(policy().review("w1", &request).allowed);
        assert!(!policy().review("w2", &request).allowed);
    }
}
