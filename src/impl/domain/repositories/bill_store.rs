use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{BillCreation, BillRecord};

/// Client contract for the remote `bills` resource. All three operations
/// may fail with a transport-level error, which propagates to the calling
/// controller unwrapped.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Fetch all bill records visible to the current session.
    async fn list(&self) -> Result<Vec<BillRecord>, ServerError>;

    /// Upload an attachment and open a draft bill record for it. The
    /// returned key identifies the draft for the later `update`.
    async fn create(
        &self,
        file_name: &str,
        content: Vec<u8>,
        email: &str,
    ) -> Result<BillCreation, ServerError>;

    /// Finalize a bill record. `selector` is the key returned by `create`;
    /// `None` is forwarded as-is (the submission path does not guard
    /// against a missing upload) and yields a malformed request that the
    /// store rejects.
    async fn update(
        &self,
        selector: Option<&str>,
        bill: &BillRecord,
    ) -> Result<BillRecord, ServerError>;
}
