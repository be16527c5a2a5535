use {
    super::Repository,
    crate::{
        kernel::entities::{
            BidId,
            TenderId,
        },
        tender::entities,
    },
};

impl Repository {
    pub async fn get_bid(&self, tender_id: TenderId, bid_id: BidId) -> Option<entities::Bid> {
        self.in_memory_store
            .bids
            .read()
            .await
            .get(&tender_id)?
            .iter()
            .find(|bid| bid.id == bid_id)
            .cloned()
    }
}
