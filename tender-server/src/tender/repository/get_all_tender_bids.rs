use {
    super::Repository,
    crate::{
        kernel::entities::TenderId,
        tender::entities,
    },
};

impl Repository {
    pub async fn get_all_tender_bids(&self, tender_id: TenderId) -> Vec<entities::Bid> {
        self.in_memory_store
            .bids
            .read()
            .await
            .get(&tender_id)
            .cloned()
            .unwrap_or_default()
    }
}
