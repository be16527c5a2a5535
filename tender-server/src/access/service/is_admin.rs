use {
    super::Service,
    crate::kernel::entities::Address,
};

impl Service {
    pub async fn is_admin(&self, address: &Address) -> bool {
        self.repo.is_admin(address).await
    }
}
