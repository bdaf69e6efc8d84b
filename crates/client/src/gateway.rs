use async_trait::async_trait;
use marquee_core::types::DbId;

use crate::api::EntriesClient;
use crate::error::ClientError;
use crate::model::{Deleted, EntryDraft, EntryPage, EntryPatch, Saved};

/// The four entry operations the library view depends on.
///
/// Implemented by [`EntriesClient`]; tests supply in-process fakes.
#[async_trait]
pub trait EntryGateway: Send + Sync {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<EntryPage, ClientError>;

    async fn create(&self, draft: &EntryDraft) -> Result<Saved, ClientError>;

    async fn update(&self, id: DbId, patch: &EntryPatch) -> Result<Saved, ClientError>;

    async fn delete(&self, id: DbId) -> Result<Deleted, ClientError>;
}

#[async_trait]
impl EntryGateway for EntriesClient {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<EntryPage, ClientError> {
        self.get_entries(page, limit).await
    }

    async fn create(&self, draft: &EntryDraft) -> Result<Saved, ClientError> {
        self.create_entry(draft).await
    }

    async fn update(&self, id: DbId, patch: &EntryPatch) -> Result<Saved, ClientError> {
        self.update_entry(id, patch).await
    }

    async fn delete(&self, id: DbId) -> Result<Deleted, ClientError> {
        self.delete_entry(id).await
    }
}
