use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::bills_http_datasource::{BillsHttpDatasource, BillsHttpDatasourceImpl},
        models::bill_record_model::BillRecordModel,
    },
    domain::repositories::bill_store::BillStore,
    entities::{BillCreation, BillRecord},
    errors::InvalidBillPayload,
};

/// `BillStore` backed by the remote HTTP record store. Converts between
/// wire models and domain entities at this boundary.
pub(crate) struct BillStoreImpl<
    DS = BillsHttpDatasourceImpl, // Default.
> where
    DS: BillsHttpDatasource,
{
    datasource: DS,
}

#[async_trait]
impl<DS> BillStore for BillStoreImpl<DS>
where
    DS: BillsHttpDatasource,
{
    async fn list(&self) -> Result<Vec<BillRecord>, ServerError> {
        Ok(self
            .datasource
            .list()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn create(
        &self,
        file_name: &str,
        content: Vec<u8>,
        email: &str,
    ) -> Result<BillCreation, ServerError> {
        Ok(self.datasource.create(file_name, content, email).await?.into())
    }

    async fn update(
        &self,
        selector: Option<&str>,
        bill: &BillRecord,
    ) -> Result<BillRecord, ServerError> {
        let body = serde_json::to_value(BillRecordModel::from(bill))
            .map_err(|e| InvalidBillPayload::with_debug("bill record", &e))?;
        Ok(self.datasource.update(selector, body).await?.into())
    }
}

impl BillStoreImpl<BillsHttpDatasourceImpl> {
    pub(crate) fn new(base_url: &str) -> Self {
        BillStoreImpl {
            datasource: BillsHttpDatasourceImpl::new(base_url),
        }
    }
}
