use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::TenderId,
        tender::entities,
    },
};

pub struct GetTenderInput {
    pub tender_id: TenderId,
}

impl Service {
    pub async fn get_tender(&self, input: GetTenderInput) -> Result<entities::Tender, RestError> {
        self.repo
            .get_tender(input.tender_id)
            .await
            .ok_or(RestError::TenderNotFound(input.tender_id))
    }
}
