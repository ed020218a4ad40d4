use async_trait::async_trait;
use fractic_server_error::ServerError;
use reqwest::multipart::{Form, Part};

use crate::{
    data::models::bill_record_model::{BillCreatedModel, BillRecordModel},
    errors::{StoreRejected, StoreRequestFailed, StoreResponseInvalid},
};

pub(crate) const BILLS_RESOURCE: &str = "bills";

/// Raw HTTP surface of the remote record store's `bills` resource.
#[async_trait]
pub(crate) trait BillsHttpDatasource: Send + Sync {
    async fn list(&self) -> Result<Vec<BillRecordModel>, ServerError>;

    async fn create(
        &self,
        file_name: &str,
        content: Vec<u8>,
        email: &str,
    ) -> Result<BillCreatedModel, ServerError>;

    async fn update(
        &self,
        selector: Option<&str>,
        body: serde_json::Value,
    ) -> Result<BillRecordModel, ServerError>;
}

pub(crate) struct BillsHttpDatasourceImpl {
    client: reqwest::Client,
    base_url: String,
}

impl BillsHttpDatasourceImpl {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, BILLS_RESOURCE)
    }

    /// Selector URL for update. A missing selector still builds a (trailing
    /// slash) URL: submissions staged without an upload go through unguarded
    /// and are rejected server-side.
    fn selector_url(&self, selector: Option<&str>) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            BILLS_RESOURCE,
            selector.unwrap_or("")
        )
    }

    async fn decode<T>(operation: &str, response: reqwest::Response) -> Result<T, ServerError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreRejected::new(operation, status.as_u16(), &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| StoreResponseInvalid::with_debug(operation, &e))
    }
}

#[async_trait]
impl BillsHttpDatasource for BillsHttpDatasourceImpl {
    async fn list(&self) -> Result<Vec<BillRecordModel>, ServerError> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| StoreRequestFailed::with_debug("GET bills", &e))?;
        Self::decode("GET bills", response).await
    }

    async fn create(
        &self,
        file_name: &str,
        content: Vec<u8>,
        email: &str,
    ) -> Result<BillCreatedModel, ServerError> {
        let form = Form::new()
            .part("file", Part::bytes(content).file_name(file_name.to_string()))
            .text("email", email.to_string());
        let response = self
            .client
            .post(self.collection_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| StoreRequestFailed::with_debug("POST bills", &e))?;
        Self::decode("POST bills", response).await
    }

    async fn update(
        &self,
        selector: Option<&str>,
        body: serde_json::Value,
    ) -> Result<BillRecordModel, ServerError> {
        let response = self
            .client
            .patch(self.selector_url(selector))
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreRequestFailed::with_debug("PATCH bills", &e))?;
        Self::decode("PATCH bills", response).await
    }
}
