use {
    super::Service,
    crate::kernel::entities::Address,
};

impl Service {
    pub async fn is_verified_vendor(&self, address: &Address) -> bool {
        self.repo.is_verified_vendor(address).await
    }
}
