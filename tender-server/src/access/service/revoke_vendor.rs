use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::Address,
        notification::TenderEvent,
    },
};

pub struct RevokeVendorInput {
    pub caller: Address,
    pub vendor: Address,
}

impl Service {
    /// Revoking verification does not touch bids the vendor has already
    /// submitted; bid validity is fixed at submission time.
    #[tracing::instrument(skip_all, fields(caller = %input.caller, vendor = %input.vendor))]
    pub async fn revoke_vendor(&self, input: RevokeVendorInput) -> Result<(), RestError> {
        self.assert_admin(&input.caller).await?;
        self.repo.remove_verified_vendor(&input.vendor).await?;
        self.emit(TenderEvent::VendorRevoked {
            vendor: input.vendor,
        });
        Ok(())
    }
}
