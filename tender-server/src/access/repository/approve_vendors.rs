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
    /// Adds the given vendors to a tender's allow-list, skipping ones
    /// already approved. Returns the vendors that were actually added.
    pub async fn approve_vendors(
        &self,
        tender_id: TenderId,
        vendors: &[Address],
        approved_by: &Address,
    ) -> Result<Vec<Address>, RestError> {
        let mut approved = self.in_memory_store.approved_vendors.write().await;
        let allow_list = approved.entry(tender_id).or_default();
        let new_vendors: Vec<Address> = vendors
            .iter()
            .filter(|vendor| !allow_list.contains(*vendor))
            .cloned()
            .collect();
        if new_vendors.is_empty() {
            return Ok(new_vendors);
        }
        self.db
            .add_approved_vendors(tender_id, &new_vendors, approved_by)
            .await?;
        allow_list.extend(new_vendors.iter().cloned());
        Ok(new_vendors)
    }
}
