use {
    super::Repository,
    crate::{
        kernel::entities::TenderId,
        tender::entities,
    },
};

impl Repository {
    pub async fn get_tender(&self, tender_id: TenderId) -> Option<entities::Tender> {
        self.in_memory_store
            .tenders
            .read()
            .await
            .get(&tender_id)
            .cloned()
    }
}
