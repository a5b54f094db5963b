use crate::client::{ApiRequest, SftpgoTransport};
use crate::error_response::{decode, Result, SftpgoError};
use crate::{Admin, Group, User, VirtualFolder};
use async_trait::async_trait;
use log::debug;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use url::Url;

/// Page size used when listing a collection.
pub const PAGE_LIMIT: usize = 100;

const API_PREFIX: [&str; 2] = ["api", "v2"];

pub trait Named {
    fn name(&self) -> &str;
}

/// An entity served under `/api/v2/<COLLECTION>` and addressed by its name.
pub trait Resource: Named + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    const COLLECTION: &'static str;
}

#[async_trait]
pub trait SftpgoRestClient<R>: Send + Sync
where
    R: Resource,
{
    /// Every item of the collection, in server order.
    async fn list(&self) -> Result<Vec<R>>;
    /// Returns the server's view of the created item.
    async fn create(&self, item: &R) -> Result<R>;
    async fn get(&self, name: &str) -> Result<R>;
    /// Replaces the item addressed by `item.name()`.
    async fn update(&self, item: &R) -> Result<()>;
    async fn delete(&self, name: &str) -> Result<()>;
}

/// CRUD client for one resource type over an injected transport.
pub struct ResourceClient<R, T> {
    transport: T,
    _resource: PhantomData<fn() -> R>,
}

impl<R, T> Clone for ResourceClient<R, T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R, T> ResourceClient<R, T>
where
    R: Resource,
    T: SftpgoTransport,
{
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn collection_url(&self) -> Result<Url> {
        self.transport
            .url_for(&[API_PREFIX[0], API_PREFIX[1], R::COLLECTION])
    }

    fn item_url(&self, name: &str) -> Result<Url> {
        // Url normalizes dot segments away, which would address the collection.
        if name.is_empty() || name == "." || name == ".." {
            return Err(SftpgoError::InvalidKey(name.to_string()));
        }

        self.transport
            .url_for(&[API_PREFIX[0], API_PREFIX[1], R::COLLECTION, name])
    }

    async fn fetch_page(&self, offset: usize) -> Result<Vec<R>> {
        let mut url = self.collection_url()?;
        url.query_pairs_mut()
            .append_pair("limit", &PAGE_LIMIT.to_string())
            .append_pair("offset", &offset.to_string());

        let body = self
            .transport
            .execute(ApiRequest::new(Method::GET, url), StatusCode::OK)
            .await?;

        // A null page is an empty, final one.
        let page: Option<Vec<R>> = decode(&body)?;
        Ok(page.unwrap_or_default())
    }
}

fn encode<R: Serialize>(item: &R) -> Result<Vec<u8>> {
    serde_json::to_vec(item).map_err(SftpgoError::Encode)
}

#[async_trait]
impl<R, T> SftpgoRestClient<R> for ResourceClient<R, T>
where
    R: Resource,
    T: SftpgoTransport,
{
    async fn list(&self) -> Result<Vec<R>> {
        let mut items = Vec::new();

        loop {
            let page = self.fetch_page(items.len()).await?;
            let page_len = page.len();
            debug!(
                "Fetched {} {} at offset {}",
                page_len,
                R::COLLECTION,
                items.len()
            );
            items.extend(page);

            if page_len < PAGE_LIMIT {
                break;
            }
        }

        Ok(items)
    }

    async fn create(&self, item: &R) -> Result<R> {
        let body = encode(item)?;
        let url = self.collection_url()?;

        let res = self
            .transport
            .execute(
                ApiRequest::new(Method::POST, url).with_body(body),
                StatusCode::CREATED,
            )
            .await?;

        decode(&res)
    }

    async fn get(&self, name: &str) -> Result<R> {
        let url = self.item_url(name)?;

        let res = self
            .transport
            .execute(ApiRequest::new(Method::GET, url), StatusCode::OK)
            .await?;

        decode(&res)
    }

    async fn update(&self, item: &R) -> Result<()> {
        let body = encode(item)?;
        let url = self.item_url(item.name())?;

        self.transport
            .execute(
                ApiRequest::new(Method::PUT, url).with_body(body),
                StatusCode::OK,
            )
            .await?;

        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let url = self.item_url(name)?;

        self.transport
            .execute(ApiRequest::new(Method::DELETE, url), StatusCode::OK)
            .await?;

        Ok(())
    }
}

/// Resource clients borrowing any transport.
pub trait SftpgoApi: SftpgoTransport + Sized {
    fn folders(&self) -> ResourceClient<VirtualFolder, &Self> {
        ResourceClient::new(self)
    }

    fn groups(&self) -> ResourceClient<Group, &Self> {
        ResourceClient::new(self)
    }

    fn users(&self) -> ResourceClient<User, &Self> {
        ResourceClient::new(self)
    }

    fn admins(&self) -> ResourceClient<Admin, &Self> {
        ResourceClient::new(self)
    }
}

impl<T> SftpgoApi for T where T: SftpgoTransport {}
