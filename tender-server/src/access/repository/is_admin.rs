use {
    super::Repository,
    crate::kernel::entities::Address,
};

impl Repository {
    pub async fn is_admin(&self, address: &Address) -> bool {
        self.in_memory_store.admins.read().await.contains(address)
    }
}
