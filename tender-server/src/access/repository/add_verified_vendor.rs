use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::Address,
    },
};

impl Repository {
    pub async fn add_verified_vendor(
        &self,
        vendor: &Address,
        verified_by: &Address,
    ) -> Result<(), RestError> {
        let mut vendors = self.in_memory_store.verified_vendors.write().await;
        if vendors.contains(vendor) {
            return Err(RestError::BadParameters(format!(
                "{vendor} is already a verified vendor"
            )));
        }
        self.db.add_verified_vendor(vendor, verified_by).await?;
        vendors.insert(vendor.clone());
        Ok(())
    }
}
