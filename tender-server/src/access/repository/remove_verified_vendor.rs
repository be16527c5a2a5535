use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::Address,
    },
};

impl Repository {
    pub async fn remove_verified_vendor(&self, vendor: &Address) -> Result<(), RestError> {
        let mut vendors = self.in_memory_store.verified_vendors.write().await;
        if !vendors.contains(vendor) {
            return Err(RestError::BadParameters(format!(
                "{vendor} is not a verified vendor"
            )));
        }
        self.db.remove_verified_vendor(vendor).await?;
        vendors.remove(vendor);
        Ok(())
    }
}
