use {
    super::Repository,
    crate::tender::entities,
};

impl Repository {
    /// Returns the requested page in ascending id order, plus the total
    /// number of tenders matching the filter.
    pub async fn get_tenders(
        &self,
        offset: u64,
        limit: u64,
        status: Option<entities::TenderStatus>,
    ) -> (Vec<entities::Tender>, u64) {
        let tenders = self.in_memory_store.tenders.read().await;
        let matching = tenders
            .values()
            .filter(|tender| status.map_or(true, |status| tender.status == status));
        let total = matching.clone().count() as u64;
        let items = matching
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        (items, total)
    }
}
