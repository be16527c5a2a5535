use {
    super::Repository,
    std::collections::{
        BTreeMap,
        HashMap,
    },
};

impl Repository {
    /// Loads the full tender and bid history into memory and seeds the id
    /// counter. Called once at startup, before the server accepts requests.
    pub async fn warm_up(&self) -> anyhow::Result<()> {
        let tenders: BTreeMap<_, _> = self
            .db
            .get_tenders()
            .await?
            .iter()
            .map(|row| row.get_tender_entity().map(|tender| (tender.id, tender)))
            .collect::<anyhow::Result<_>>()?;
        let mut bids: HashMap<_, Vec<_>> = HashMap::new();
        for row in self.db.get_bids().await? {
            let bid = row.get_bid_entity()?;
            bids.entry(bid.tender_id).or_default().push(bid);
        }

        let next_id = tenders.keys().max().map_or(1, |max| max + 1);
        tracing::info!(
            tenders = tenders.len(),
            next_tender_id = next_id,
            "Warmed up tender store"
        );
        *self.in_memory_store.tenders.write().await = tenders;
        *self.in_memory_store.bids.write().await = bids;
        *self.in_memory_store.next_tender_id.lock().await = next_id;
        Ok(())
    }
}
