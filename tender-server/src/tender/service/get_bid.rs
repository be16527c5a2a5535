use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::{
            Address,
            BidId,
            TenderId,
        },
        tender::entities,
    },
};

pub struct GetBidInput {
    /// None for an unauthenticated caller.
    pub caller:    Option<Address>,
    pub tender_id: TenderId,
    pub bid_id:    BidId,
}

impl Service {
    /// Single-bid lookup, under the same visibility rule as the bid list.
    pub async fn get_bid(&self, input: GetBidInput) -> Result<entities::Bid, RestError> {
        let tender = self
            .repo
            .get_tender(input.tender_id)
            .await
            .ok_or(RestError::TenderNotFound(input.tender_id))?;
        if tender.is_private {
            let caller = input.caller.as_ref().ok_or(RestError::Unauthorized)?;
            let visible = *caller == tender.owner
                || self.access.is_admin(caller).await
                || self.access.is_approved_vendor(tender.id, caller).await;
            if !visible {
                return Err(RestError::Forbidden);
            }
        }
        self.repo
            .get_bid(input.tender_id, input.bid_id)
            .await
            .ok_or(RestError::BidNotFound {
                tender_id: input.tender_id,
                bid_id:    input.bid_id,
            })
    }
}
