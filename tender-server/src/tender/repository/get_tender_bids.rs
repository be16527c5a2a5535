use {
    super::Repository,
    crate::{
        kernel::entities::TenderId,
        tender::entities,
    },
};

impl Repository {
    /// Returns the requested page in submission order, plus the total
    /// number of bids on the tender.
    pub async fn get_tender_bids(
        &self,
        tender_id: TenderId,
        offset: u64,
        limit: u64,
    ) -> (Vec<entities::Bid>, u64) {
        let bids = self.in_memory_store.bids.read().await;
        let bids = bids.get(&tender_id).map(Vec::as_slice).unwrap_or(&[]);
        let items = bids
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        (items, bids.len() as u64)
    }
}
