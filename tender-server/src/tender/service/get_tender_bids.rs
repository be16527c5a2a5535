use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::{
            Address,
            TenderId,
        },
        tender::entities,
    },
};

pub struct GetTenderBidsInput {
    /// None for an unauthenticated caller.
    pub caller:    Option<Address>,
    pub tender_id: TenderId,
    pub offset:    u64,
    pub limit:     Option<u64>,
}

impl Service {
    /// Bids on a private tender are visible only to the owner, admins and
    /// allow-listed vendors.
    pub async fn get_tender_bids(
        &self,
        input: GetTenderBidsInput,
    ) -> Result<(Vec<entities::Bid>, u64), RestError> {
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
        let limit = self.clamp_page_limit(input.limit);
        Ok(self
            .repo
            .get_tender_bids(input.tender_id, input.offset, limit)
            .await)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            access,
            tender::{
                repository::MockDatabase,
                service::{
                    create_tender::CreateTenderInput,
                    submit_bid::SubmitBidInput,
                },
            },
        },
        time::{
            Duration,
            OffsetDateTime,
        },
    };

    #[tokio::test]
    async fn test_private_tender_bids_hidden_from_outsiders() {
        let mut db = MockDatabase::new();
        db.expect_add_tender().returning(|_, _| Ok(()));
        db.expect_add_bid().returning(|_| Ok(()));
        let (service, _) =
            Service::new_with_mocks(db, access::repository::MockDatabase::new());
        let tender = service
            .create_tender(CreateTenderInput {
                caller:          "owner".to_string(),
                title:           "Confidential works".to_string(),
                description:     "Restricted procurement".to_string(),
                deadline:        OffsetDateTime::now_utc() + Duration::days(7),
                min_bid:         100,
                document_hash:   String::new(),
                is_private:      true,
                allowed_bidders: vec!["vendor-1".to_string()],
            })
            .await
            .unwrap();
        service
            .submit_bid(SubmitBidInput {
                caller:    "vendor-1".to_string(),
                tender_id: tender.id,
                amount:    150,
                proposal:  "proposal".to_string(),
            })
            .await
            .unwrap();

        let anonymous = service
            .get_tender_bids(GetTenderBidsInput {
                caller:    None,
                tender_id: tender.id,
                offset:    0,
                limit:     None,
            })
            .await;
        assert!(matches!(anonymous, Err(RestError::Unauthorized)));

        let outsider = service
            .get_tender_bids(GetTenderBidsInput {
                caller:    Some("vendor-2".to_string()),
                tender_id: tender.id,
                offset:    0,
                limit:     None,
            })
            .await;
        assert!(matches!(outsider, Err(RestError::Forbidden)));

        let (bids, total) = service
            .get_tender_bids(GetTenderBidsInput {
                caller:    Some("vendor-1".to_string()),
                tender_id: tender.id,
                offset:    0,
                limit:     None,
            })
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(bids[0].bidder, "vendor-1");

        let (owner_bids, _) = service
            .get_tender_bids(GetTenderBidsInput {
                caller:    Some("owner".to_string()),
                tender_id: tender.id,
                offset:    0,
                limit:     None,
            })
            .await
            .unwrap();
        assert_eq!(owner_bids.len(), 1);
    }
}
