use serde::{Deserialize, Serialize};
use url::Url;

/// Connection settings for an SFTPGo server.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct SftpgoClientConfig {
    /// Root of the server, e.g. `https://sftpgo.example.com`. Any path on it is
    /// kept as a prefix for the REST endpoints.
    pub base_url: Url,
    /// Deadline applied to every request. No deadline when unset.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl SftpgoClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_seconds: None,
            user_agent: None,
        }
    }
}
