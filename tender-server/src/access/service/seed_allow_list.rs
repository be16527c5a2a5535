use {
    super::Service,
    crate::kernel::entities::{
        Address,
        TenderId,
    },
};

impl Service {
    /// Called by tender creation after the tender and its initial
    /// allow-list rows have been committed together.
    pub(crate) async fn seed_allow_list(&self, tender_id: TenderId, vendors: &[Address]) {
        self.repo.seed_allow_list(tender_id, vendors).await;
    }
}
