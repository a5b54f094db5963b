use crate::rest_client::{Named, Resource, ResourceClient};
use crate::UserStatus;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct Admin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Only sent, the server never returns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Named for Admin {
    fn name(&self) -> &str {
        &self.username
    }
}

impl Resource for Admin {
    const COLLECTION: &'static str = "admins";
}

pub type AdminsClient<T> = ResourceClient<Admin, T>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_admin_with_extra_settings() {
        let admin: Admin = serde_json::from_value(json!({
            "id": 1,
            "username": "root",
            "status": 1,
            "permissions": ["*"],
            "filters": {"allow_list": []}
        }))
        .unwrap();

        assert_eq!(admin.name(), "root");
        assert_eq!(admin.permissions, vec!["*".to_string()]);
        assert!(admin.password.is_none());
        assert!(admin.other.contains_key("filters"));
    }
}
