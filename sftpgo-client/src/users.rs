use crate::filesystem::FileSystem;
use crate::rest_client::{Named, Resource, ResourceClient};
use crate::virtual_folder_reference::VirtualFolderReference;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_repr::*;
use std::collections::HashMap;

#[derive(Serialize_repr, Deserialize_repr, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[repr(u8)]
pub enum UserStatus {
    #[default]
    Disabled = 0,
    Enabled = 1,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub status: UserStatus,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unix timestamp in milliseconds, 0 means no expiration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub public_keys: Vec<String>,
    #[serde(default)]
    pub home_dir: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sessions: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_files: Option<i32>,
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
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtual_folders: Vec<VirtualFolderReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesystem: Option<FileSystem>,
    /// Group memberships, filters and the other server managed fields.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Named for User {
    fn name(&self) -> &str {
        &self.username
    }
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
}

pub type UsersClient<T> = ResourceClient<User, T>;
