use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Standard object metadata carried by every workspace resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl ObjectMeta {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// Label value, falling back to the annotation with the same key
    pub fn label_or_annotation(&self, key: &str) -> Option<&str> {
        self.label(key).or_else(|| self.annotation(key))
    }
}

/// Common access to the metadata of a resource
pub trait Resource {
    const KIND: &'static str;

    fn metadata(&self) -> &ObjectMeta;

    fn name(&self) -> &str {
        &self.metadata().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_or_annotation_prefers_label() {
        let mut meta = ObjectMeta::new("plr-1", "w1-tenant");
        meta.annotations
            .insert("example.dev/branch".into(), "from-annotation".into());
        assert_eq!(
            meta.label_or_annotation("example.dev/branch"),
            Some("from-annotation")
        );

        meta.labels
            .insert("example.dev/branch".into(), "from-label".into());
        assert_eq!(
            meta.label_or_annotation("example.dev/branch"),
            Some("from-label")
        );
    }

    #[test]
    fn test_deserialize_minimal_metadata() {
        let meta: ObjectMeta = serde_json::from_str(r#"{"name":"app1"}"#).unwrap();
        assert_eq!(meta.name, "app1");
        assert!(meta.namespace.is_empty());
        assert!(meta.labels.is_empty());
        assert!(meta.creation_timestamp.is_none());
    }
}
