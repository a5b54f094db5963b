use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A virtual folder mapped into a user's or group's namespace.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct VirtualFolderReference {
    pub name: String,
    pub virtual_path: String,
    /// -1 inherits the user's quota, 0 is unlimited.
    #[serde(default)]
    pub quota_size: i64,
    #[serde(default)]
    pub quota_files: i32,
    /// Remaining folder fields echoed back by the server.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
