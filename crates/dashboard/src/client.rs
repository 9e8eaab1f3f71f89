use std::marker::PhantomData;

use models::Resource;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("service returned status {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

/// HTTP client for one resource service.
///
/// Any transport failure or non-success status is one `ClientError`; the
/// aggregator only ever needs "succeeded or not".
#[derive(Clone)]
pub struct ResourceClient<T: Resource> {
    http: reqwest::Client,
    base_url: String,
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: reqwest::Client::new(), base_url, _resource: PhantomData }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, T::NAME)
    }

    pub async fn list(&self) -> Result<Vec<T>, ClientError> {
        let resp = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(ClientError::Status(resp.status().as_u16()));
        }
        resp.json::<Vec<T>>().await.map_err(|e| ClientError::Parse(e.to_string()))
    }

    pub async fn create(&self, draft: &T::Draft) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(ClientError::Status(resp.status().as_u16()));
        }
        resp.json::<T>().await.map_err(|e| ClientError::Parse(e.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(format!("{}/{}", self.collection_url(), id))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(ClientError::Status(resp.status().as_u16()));
        }
        Ok(())
    }
}
