use {
    super::Repository,
    crate::{
        api::RestError,
        tender::entities,
    },
};

impl Repository {
    /// Caller must hold the tender's lock and have validated that the
    /// tender is active. A winner is never assigned.
    pub async fn cancel_tender(
        &self,
        tender: &entities::Tender,
    ) -> Result<entities::Tender, RestError> {
        let mut cancelled = tender.clone();
        cancelled.status = entities::TenderStatus::Cancelled;
        self.db.cancel_tender(&cancelled).await?;

        self.in_memory_store
            .tenders
            .write()
            .await
            .insert(cancelled.id, cancelled.clone());
        if let Some(bids) = self
            .in_memory_store
            .bids
            .write()
            .await
            .get_mut(&cancelled.id)
        {
            for bid in bids.iter_mut() {
                bid.status = entities::BidStatus::Lost;
            }
        }
        Ok(cancelled)
    }
}
