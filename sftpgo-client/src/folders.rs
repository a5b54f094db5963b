use crate::filesystem::FileSystem;
use crate::rest_client::{Named, Resource, ResourceClient};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A storage location that can be mapped into users and groups.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct VirtualFolder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub mapped_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_quota_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_quota_files: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_quota_update: Option<i64>,
    /// Users the folder is mapped into. Read only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesystem: Option<FileSystem>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Named for VirtualFolder {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Resource for VirtualFolder {
    const COLLECTION: &'static str = "folders";
}

pub type FoldersClient<T> = ResourceClient<VirtualFolder, T>;
