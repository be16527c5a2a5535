use {
    super::Repository,
    crate::kernel::entities::TenderId,
};

impl Repository {
    /// Dropped once the tender reaches a terminal status; later calls fail
    /// their status precondition before ever needing the lock.
    pub async fn remove_tender_lock(&self, tender_id: &TenderId) {
        self.in_memory_store
            .tender_lock
            .lock()
            .await
            .remove(tender_id);
    }
}
