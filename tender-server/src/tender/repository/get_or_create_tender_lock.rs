use {
    super::Repository,
    crate::{
        kernel::entities::TenderId,
        tender::entities::TenderLock,
    },
    std::sync::Arc,
    tokio::sync::Mutex,
};

impl Repository {
    pub async fn get_or_create_tender_lock(&self, tender_id: TenderId) -> TenderLock {
        self.in_memory_store
            .tender_lock
            .lock()
            .await
            .entry(tender_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
