use crate::filesystem::FileSystem;
use crate::rest_client::{Named, Resource, ResourceClient};
use crate::virtual_folder_reference::VirtualFolderReference;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Settings a group applies to its members.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct GroupUserSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sessions: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_files: Option<i32>,
    /// Directory path to permission list, e.g. `"/" => ["*"]`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub permissions: HashMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_bandwidth: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_bandwidth: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_data_transfer: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_data_transfer: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_data_transfer: Option<i64>,
    /// Days until accounts created from this group expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesystem: Option<FileSystem>,
    /// `filters` and anything else the server adds.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default)]
    pub user_settings: GroupUserSettings,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtual_folders: Vec<VirtualFolderReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub admins: Vec<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Named for Group {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Resource for Group {
    const COLLECTION: &'static str = "groups";
}

pub type GroupsClient<T> = ResourceClient<Group, T>;
