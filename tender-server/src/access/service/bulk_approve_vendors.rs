use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::{
            Address,
            TenderId,
        },
        notification::TenderEvent,
    },
};

pub struct BulkApproveVendorsInput {
    pub caller:    Address,
    pub tender_id: TenderId,
    pub vendors:   Vec<Address>,
}

impl Service {
    /// Vendors already on the allow-list are skipped rather than rejected,
    /// so a partially overlapping batch still lands the new approvals.
    /// Returns the vendors that were actually added.
    #[tracing::instrument(skip_all, fields(tender_id = input.tender_id, vendors = input.vendors.len()))]
    pub async fn bulk_approve_vendors(
        &self,
        input: BulkApproveVendorsInput,
    ) -> Result<Vec<Address>, RestError> {
        if input.vendors.is_empty() {
            return Err(RestError::BadParameters(
                "no vendors to approve".to_string(),
            ));
        }
        let tender = self.get_private_active_tender(input.tender_id).await?;
        self.assert_admin_or_owner(&input.caller, &tender.owner)
            .await?;
        let added = self
            .repo
            .approve_vendors(input.tender_id, &input.vendors, &input.caller)
            .await?;
        for vendor in &added {
            self.emit(TenderEvent::VendorApproved {
                tender_id:   input.tender_id,
                vendor:      vendor.clone(),
                approved_by: input.caller.clone(),
            });
        }
        Ok(added)
    }
}
