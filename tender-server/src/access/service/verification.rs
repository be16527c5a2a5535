use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::{
            Address,
            TenderId,
        },
        tender::entities::Tender,
    },
};

impl Service {
    pub async fn assert_admin(&self, caller: &Address) -> Result<(), RestError> {
        if self.repo.is_admin(caller).await {
            Ok(())
        } else {
            Err(RestError::Forbidden)
        }
    }

    pub async fn assert_admin_or_owner(
        &self,
        caller: &Address,
        owner: &Address,
    ) -> Result<(), RestError> {
        if caller == owner || self.repo.is_admin(caller).await {
            Ok(())
        } else {
            Err(RestError::Forbidden)
        }
    }

    /// Allow-list mutations are only meaningful for a private tender that
    /// is still accepting bids.
    pub(super) async fn get_private_active_tender(
        &self,
        tender_id: TenderId,
    ) -> Result<Tender, RestError> {
        let tender = self
            .tender_repo
            .get_tender(tender_id)
            .await
            .ok_or(RestError::TenderNotFound(tender_id))?;
        if !tender.is_private {
            return Err(RestError::BadParameters(format!(
                "tender {tender_id} is not private"
            )));
        }
        if !tender.status.is_active() {
            return Err(RestError::InvalidState {
                tender_id,
                status: tender.status,
            });
        }
        Ok(tender)
    }
}
