use serde::{Deserialize, Serialize};

/// Workspace name and the namespace its resources live in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    pub name: String,
    pub namespace: String,
}
