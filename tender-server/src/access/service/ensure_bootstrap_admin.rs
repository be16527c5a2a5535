use {
    super::Service,
    crate::kernel::entities::Address,
};

impl Service {
    /// Installs the configured admin when the admin set is empty, e.g. on
    /// the first start against a fresh database. Once any admin exists the
    /// configured address is ignored; the set can then only change through
    /// the admin operations, which refuse to empty it.
    pub async fn ensure_bootstrap_admin(&self, admin: &Address) -> anyhow::Result<()> {
        if !self.repo.in_memory_store.admins.read().await.is_empty() {
            return Ok(());
        }
        tracing::info!(admin, "Bootstrapping initial admin");
        self.repo
            .add_admin(admin, admin)
            .await
            .map_err(|e| anyhow::anyhow!("failed to bootstrap admin: {e:?}"))?;
        Ok(())
    }
}
