use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::BidId,
        tender::entities,
    },
};

impl Repository {
    /// Caller must hold the tender's lock and have validated that the
    /// tender is active. `winning_bid_id` is 0 for a closure without bids.
    pub async fn conclude_tender(
        &self,
        tender: &entities::Tender,
        winning_bid_id: BidId,
    ) -> Result<entities::Tender, RestError> {
        let mut closed = tender.clone();
        closed.status = entities::TenderStatus::Closed;
        closed.winning_bid_id = winning_bid_id;
        self.db.conclude_tender(&closed).await?;

        self.in_memory_store
            .tenders
            .write()
            .await
            .insert(closed.id, closed.clone());
        if let Some(bids) = self.in_memory_store.bids.write().await.get_mut(&closed.id) {
            for bid in bids.iter_mut() {
                bid.status = if bid.id == winning_bid_id {
                    entities::BidStatus::Won
                } else {
                    entities::BidStatus::Lost
                };
            }
        }
        Ok(closed)
    }
}
