use {
    super::Repository,
    crate::kernel::entities::{
        Address,
        TenderId,
    },
};

impl Repository {
    pub async fn is_approved_vendor(&self, tender_id: TenderId, address: &Address) -> bool {
        self.in_memory_store
            .approved_vendors
            .read()
            .await
            .get(&tender_id)
            .map_or(false, |allow_list| allow_list.contains(address))
    }
}
