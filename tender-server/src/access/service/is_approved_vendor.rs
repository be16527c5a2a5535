use {
    super::Service,
    crate::kernel::entities::{
        Address,
        TenderId,
    },
};

impl Service {
    pub async fn is_approved_vendor(&self, tender_id: TenderId, address: &Address) -> bool {
        self.repo.is_approved_vendor(tender_id, address).await
    }
}
