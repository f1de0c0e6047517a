use reqwest::{Client, Response};

use crate::error::ClientError;
use crate::types::{Item, ItemInput};

/// HTTP client for the catalog's item resource.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured reqwest client (timeouts, proxies).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self) -> String {
        format!("{}/api/items", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/api/items/{}", self.base_url, id)
    }

    /// Fetch every item in catalog order.
    pub async fn list_items(&self) -> Result<Vec<Item>, ClientError> {
        let resp = self.client.get(self.items_url()).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn get_item(&self, id: u64) -> Result<Item, ClientError> {
        let resp = self.client.get(self.item_url(id)).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn create_item(&self, input: &ItemInput) -> Result<Item, ClientError> {
        let resp = self.client.post(self.items_url()).json(input).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn update_item(&self, id: u64, input: &ItemInput) -> Result<Item, ClientError> {
        let resp = self.client.put(self.item_url(id)).json(input).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// Delete an item. Succeeds whether or not it existed.
    pub async fn delete_item(&self, id: u64) -> Result<(), ClientError> {
        let resp = self.client.delete(self.item_url(id)).send().await?;
        check(resp).await?;
        Ok(())
    }

    /// Absolute URL of an item's image.
    ///
    /// Relative references are resolved against the server; absolute URLs
    /// are returned unchanged.
    pub fn image_url(&self, item: &Item) -> Option<String> {
        let image = item.image_ref.as_deref()?;
        if image.starts_with("http://") || image.starts_with("https://") {
            Some(image.to_string())
        } else if image.starts_with('/') {
            Some(format!("{}{}", self.base_url, image))
        } else {
            Some(format!("{}/{}", self.base_url, image))
        }
    }
}

/// Turn non-success statuses into errors carrying the response text.
async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}
