use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::{
            Address,
            TenderId,
        },
    },
};

pub struct GetApprovedVendorsInput {
    pub caller:    Address,
    pub tender_id: TenderId,
}

impl Service {
    /// The full allow-list is visible to the tender owner and admins only;
    /// individual vendors can check their own standing via the
    /// is-approved query instead.
    pub async fn get_approved_vendors(
        &self,
        input: GetApprovedVendorsInput,
    ) -> Result<Vec<Address>, RestError> {
        let tender = self
            .tender_repo
            .get_tender(input.tender_id)
            .await
            .ok_or(RestError::TenderNotFound(input.tender_id))?;
        self.assert_admin_or_owner(&input.caller, &tender.owner)
            .await?;
        Ok(self.repo.get_approved_vendors(input.tender_id).await)
    }
}
