use {
    super::Repository,
    crate::{
        api::RestError,
        tender::entities,
    },
};

impl Repository {
    /// Caller must hold the tender's lock. Bid ids are `bids_count + 1`,
    /// so they are strictly increasing per tender starting at 1.
    pub async fn add_bid(&self, create: entities::BidCreate) -> Result<entities::Bid, RestError> {
        let bid_id = {
            let tenders = self.in_memory_store.tenders.read().await;
            let tender = tenders
                .get(&create.tender_id)
                .ok_or(RestError::TenderNotFound(create.tender_id))?;
            tender.bids_count + 1
        };
        let bid = entities::Bid {
            id:              bid_id,
            tender_id:       create.tender_id,
            bidder:          create.bidder,
            amount:          create.amount,
            proposal:        create.proposal,
            status:          entities::BidStatus::Pending,
            submission_time: create.submission_time,
        };
        self.db.add_bid(&bid).await?;

        self.in_memory_store
            .bids
            .write()
            .await
            .entry(bid.tender_id)
            .or_insert_with(Vec::new)
            .push(bid.clone());
        if let Some(tender) = self
            .in_memory_store
            .tenders
            .write()
            .await
            .get_mut(&bid.tender_id)
        {
            tender.bids_count += 1;
        }
        Ok(bid)
    }
}
