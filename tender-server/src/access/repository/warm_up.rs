use {
    super::Repository,
    std::collections::{
        HashMap,
        HashSet,
    },
};

impl Repository {
    /// Loads the role registry into memory. Called once at startup, before
    /// the server accepts requests.
    pub async fn warm_up(&self) -> anyhow::Result<()> {
        let admins: HashSet<_> = self.db.get_admins().await?.into_iter().collect();
        let verified_vendors: HashSet<_> =
            self.db.get_verified_vendors().await?.into_iter().collect();
        let mut approved_vendors: HashMap<_, HashSet<_>> = HashMap::new();
        for row in self.db.get_approved_vendors().await? {
            let tender_id = row
                .tender_id
                .try_into()
                .map_err(|_| anyhow::anyhow!("invalid tender id in allow-list"))?;
            approved_vendors
                .entry(tender_id)
                .or_default()
                .insert(row.vendor);
        }

        tracing::info!(
            admins = admins.len(),
            verified_vendors = verified_vendors.len(),
            "Warmed up role registry"
        );
        *self.in_memory_store.admins.write().await = admins;
        *self.in_memory_store.verified_vendors.write().await = verified_vendors;
        *self.in_memory_store.approved_vendors.write().await = approved_vendors;
        Ok(())
    }
}
