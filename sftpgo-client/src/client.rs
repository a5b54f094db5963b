use crate::auth::AuthContext;
use crate::config::SftpgoClientConfig;
use crate::error_response::{check_status, Result, SftpgoError};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderName, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// A fully built request, ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// JSON encoded body.
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
        }
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Delivers requests to the SFTPGo REST API.
///
/// Implementations own base url composition, authentication and status
/// validation: `execute` fails with [`SftpgoError::UnexpectedStatus`] whenever
/// the response status differs from `expected_status`.
#[async_trait]
pub trait SftpgoTransport: Send + Sync {
    /// Appends `segments` to the base url, percent-encoding each one as a
    /// single path segment.
    fn url_for(&self, segments: &[&str]) -> Result<Url>;

    async fn execute(&self, request: ApiRequest, expected_status: StatusCode) -> Result<Vec<u8>>;
}

#[async_trait]
impl<'a, T> SftpgoTransport for &'a T
where
    T: SftpgoTransport + ?Sized,
{
    fn url_for(&self, segments: &[&str]) -> Result<Url> {
        (**self).url_for(segments)
    }

    async fn execute(&self, request: ApiRequest, expected_status: StatusCode) -> Result<Vec<u8>> {
        (**self).execute(request, expected_status).await
    }
}

#[async_trait]
impl<T> SftpgoTransport for Arc<T>
where
    T: SftpgoTransport + ?Sized,
{
    fn url_for(&self, segments: &[&str]) -> Result<Url> {
        (**self).url_for(segments)
    }

    async fn execute(&self, request: ApiRequest, expected_status: StatusCode) -> Result<Vec<u8>> {
        (**self).execute(request, expected_status).await
    }
}

#[derive(Clone, Debug)]
pub struct SftpgoClient {
    client: Client,
    base_url: Url,
}

impl SftpgoClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &SftpgoClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn with_auth_context<A>(&self, auth_context: A) -> AuthorizedSftpgoClient<A>
    where
        A: AuthContext,
    {
        AuthorizedSftpgoClient {
            client: self.clone(),
            auth_context: Arc::new(auth_context),
        }
    }

    async fn send(
        &self,
        auth_header: Option<(HeaderName, String)>,
        request: ApiRequest,
        expected_status: StatusCode,
    ) -> Result<Vec<u8>> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self.client.request(request.method, request.url);
        if let Some((name, value)) = auth_header {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let res = builder.send().await?;
        let status = res.status();
        let body = res.bytes().await?;
        debug!("Got status {} with {} bytes", status, body.len());

        check_status(status, expected_status, body.to_vec())
    }
}

pub(crate) fn append_segments(base_url: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| SftpgoError::InvalidBaseUrl(base_url.clone()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[async_trait]
impl SftpgoTransport for SftpgoClient {
    fn url_for(&self, segments: &[&str]) -> Result<Url> {
        append_segments(&self.base_url, segments)
    }

    async fn execute(&self, request: ApiRequest, expected_status: StatusCode) -> Result<Vec<u8>> {
        self.send(None, request, expected_status).await
    }
}

pub struct AuthorizedSftpgoClient<A>
where
    A: AuthContext,
{
    client: SftpgoClient,
    auth_context: Arc<A>,
}

impl<A> Clone for AuthorizedSftpgoClient<A>
where
    A: AuthContext,
{
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            auth_context: self.auth_context.clone(),
        }
    }
}

impl<A> AuthorizedSftpgoClient<A>
where
    A: AuthContext,
{
    pub fn get_auth_context(&self) -> &A {
        &self.auth_context
    }
}

#[async_trait]
impl<A> SftpgoTransport for AuthorizedSftpgoClient<A>
where
    A: AuthContext,
{
    fn url_for(&self, segments: &[&str]) -> Result<Url> {
        self.client.url_for(segments)
    }

    async fn execute(&self, request: ApiRequest, expected_status: StatusCode) -> Result<Vec<u8>> {
        let auth_header = self.auth_context.get_auth_header().await?;
        self.client.send(auth_header, request, expected_status).await
    }
}
