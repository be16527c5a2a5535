use {
    super::Repository,
    crate::kernel::entities::{
        Address,
        TenderId,
    },
};

impl Repository {
    pub async fn get_approved_vendors(&self, tender_id: TenderId) -> Vec<Address> {
        let mut vendors: Vec<Address> = self
            .in_memory_store
            .approved_vendors
            .read()
            .await
            .get(&tender_id)
            .map(|allow_list| allow_list.iter().cloned().collect())
            .unwrap_or_default();
        vendors.sort();
        vendors
    }
}
