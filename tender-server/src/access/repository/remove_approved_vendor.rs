use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::{
            Address,
            TenderId,
        },
    },
};

impl Repository {
    pub async fn remove_approved_vendor(
        &self,
        tender_id: TenderId,
        vendor: &Address,
    ) -> Result<(), RestError> {
        let mut approved = self.in_memory_store.approved_vendors.write().await;
        let allow_list = approved
            .get_mut(&tender_id)
            .filter(|allow_list| allow_list.contains(vendor))
            .ok_or_else(|| {
                RestError::BadParameters(format!(
                    "{vendor} is not approved for tender {tender_id}"
                ))
            })?;
        self.db.remove_approved_vendor(tender_id, vendor).await?;
        allow_list.remove(vendor);
        Ok(())
    }
}
