//! Resource metadata shared by every namespaced record.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The namespace used when a request does not name one.
pub const NAMESPACE_DEFAULT: &str = "default";

/// Sentinel meaning "every namespace", used when listing across partitions.
pub const NAMESPACE_ALL: &str = "";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generate_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub self_link: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: HashMap<String, String>,
}

impl ObjectMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Fills in `uid` and `creation_timestamp` if they are not set yet.
    pub fn assign_uid(&mut self) {
        if self.uid.is_empty() {
            self.uid = uuid::Uuid::new_v4().to_string();
        }
        if self.creation_timestamp.is_none() {
            self.creation_timestamp = Some(Utc::now());
        }
    }
}

/// Records that carry an [`ObjectMeta`].
pub trait HasObjectMeta {
    fn object_meta(&self) -> &ObjectMeta;
    fn object_meta_mut(&mut self) -> &mut ObjectMeta;
}

impl HasObjectMeta for ObjectMeta {
    fn object_meta(&self) -> &ObjectMeta {
        self
    }

    fn object_meta_mut(&mut self) -> &mut ObjectMeta {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_namespaces() {
        assert_eq!(NAMESPACE_DEFAULT, "default");
        assert!(NAMESPACE_ALL.is_empty());
    }

    #[test]
    fn test_namespaced_constructor() {
        let meta = ObjectMeta::namespaced("team-a", "web");
        assert_eq!(meta.name, "web");
        assert_eq!(meta.namespace, "team-a");
        assert!(meta.uid.is_empty());
    }

    #[test]
    fn test_assign_uid_is_stable() {
        let mut meta = ObjectMeta::new("web");
        meta.assign_uid();
        let uid = meta.uid.clone();
        let created = meta.creation_timestamp;

        assert!(uuid::Uuid::parse_str(&uid).is_ok());
        assert!(created.is_some());

        meta.assign_uid();
        assert_eq!(meta.uid, uid);
        assert_eq!(meta.creation_timestamp, created);
    }

    #[test]
    fn test_serializes_camel_case_and_skips_empty() {
        let meta = ObjectMeta::namespaced("team-a", "web").with_label("app", "web");
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["namespace"], "team-a");
        assert_eq!(json["labels"]["app"], "web");
        assert!(json.get("generateName").is_none());
        assert!(json.get("annotations").is_none());
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
name: web
namespace: team-a
resourceVersion: "12"
annotations:
  owner: ops
"#;
        let meta: ObjectMeta = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(meta.resource_version, "12");
        assert_eq!(meta.annotations.get("owner").unwrap(), "ops");
        assert!(meta.labels.is_empty());
    }
}
