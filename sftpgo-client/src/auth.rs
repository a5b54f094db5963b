use crate::error_response::Result;
use async_trait::async_trait;
use base64::engine::general_purpose;
use base64::Engine;
use reqwest::header::{HeaderName, AUTHORIZATION};

pub const API_KEY_HEADER: &str = "x-sftpgo-api-key";

pub fn create_basic_auth_header(username: &str, password: &str) -> String {
    let encoded = general_purpose::STANDARD.encode(format!("{}:{}", username, password));
    format!("Basic {}", encoded,)
}

pub fn create_bearer_auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Supplies the header that authenticates a request, if any.
#[async_trait]
pub trait AuthContext: Send + Sync {
    async fn get_auth_header(&self) -> Result<Option<(HeaderName, String)>>;
}

#[derive(Clone, Debug, Default)]
pub struct NoAuth;

#[async_trait]
impl AuthContext for NoAuth {
    async fn get_auth_header(&self) -> Result<Option<(HeaderName, String)>> {
        Ok(None)
    }
}

/// An access token obtained out of band, e.g. from `/api/v2/token`.
#[derive(Clone, Debug)]
pub struct BearerToken(pub String);

#[async_trait]
impl AuthContext for BearerToken {
    async fn get_auth_header(&self) -> Result<Option<(HeaderName, String)>> {
        Ok(Some((AUTHORIZATION, create_bearer_auth_header(&self.0))))
    }
}

#[derive(Clone, Debug)]
pub struct ApiKey(pub String);

#[async_trait]
impl AuthContext for ApiKey {
    async fn get_auth_header(&self) -> Result<Option<(HeaderName, String)>> {
        Ok(Some((
            HeaderName::from_static(API_KEY_HEADER),
            self.0.clone(),
        )))
    }
}

#[derive(Clone, Debug)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

#[async_trait]
impl AuthContext for BasicAuth {
    async fn get_auth_header(&self) -> Result<Option<(HeaderName, String)>> {
        Ok(Some((
            AUTHORIZATION,
            create_basic_auth_header(&self.username, &self.password),
        )))
    }
}
