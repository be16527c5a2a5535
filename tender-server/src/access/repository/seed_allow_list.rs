use {
    super::Repository,
    crate::kernel::entities::{
        Address,
        TenderId,
    },
};

impl Repository {
    /// Installs the initial allow-list of a newly created private tender.
    /// The rows were already persisted in the tender's own insert
    /// transaction, so this only touches memory.
    pub async fn seed_allow_list(&self, tender_id: TenderId, vendors: &[Address]) {
        self.in_memory_store
            .approved_vendors
            .write()
            .await
            .entry(tender_id)
            .or_default()
            .extend(vendors.iter().cloned());
    }
}
