use {
    super::Repository,
    crate::kernel::entities::Address,
};

impl Repository {
    pub async fn is_verified_vendor(&self, address: &Address) -> bool {
        self.in_memory_store
            .verified_vendors
            .read()
            .await
            .contains(address)
    }
}
