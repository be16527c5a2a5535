use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::{
            Address,
            Amount,
            TenderId,
        },
        notification::TenderEvent,
        tender::entities,
    },
    time::OffsetDateTime,
};

pub struct SubmitBidInput {
    pub caller:    Address,
    pub tender_id: TenderId,
    pub amount:    Amount,
    pub proposal:  String,
}

impl Service {
    /// Runs inside the tender's critical section so that bid ids are
    /// assigned in submission order and closure sees a fully ordered view.
    #[tracing::instrument(skip_all, fields(tender_id = input.tender_id, bidder = %input.caller, bid_id))]
    pub async fn submit_bid(&self, input: SubmitBidInput) -> Result<entities::Bid, RestError> {
        let tender_lock = self.repo.get_or_create_tender_lock(input.tender_id).await;
        let _lock = tender_lock.lock().await;

        let tender = self
            .repo
            .get_tender(input.tender_id)
            .await
            .ok_or(RestError::TenderNotFound(input.tender_id))?;
        if !tender.status.is_active() {
            return Err(RestError::InvalidState {
                tender_id: tender.id,
                status:    tender.status,
            });
        }
        let now = OffsetDateTime::now_utc();
        if now >= tender.deadline {
            return Err(RestError::DeadlinePassed {
                tender_id: tender.id,
            });
        }
        if input.amount < tender.min_bid {
            return Err(RestError::BidTooLow {
                tender_id: tender.id,
                amount:    input.amount,
                min_bid:   tender.min_bid,
            });
        }
        if tender.is_private
            && !self
                .access
                .is_approved_vendor(tender.id, &input.caller)
                .await
        {
            return Err(RestError::Forbidden);
        }

        let bid = self
            .repo
            .add_bid(entities::BidCreate {
                tender_id:       input.tender_id,
                bidder:          input.caller,
                amount:          input.amount,
                proposal:        input.proposal,
                submission_time: now,
            })
            .await?;
        tracing::Span::current().record("bid_id", bid.id);

        let tender = self
            .repo
            .get_tender(input.tender_id)
            .await
            .unwrap_or(tender);
        self.emit(TenderEvent::BidSubmitted {
            tender,
            bid: bid.clone(),
        });
        Ok(bid)
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
                service::create_tender::CreateTenderInput,
            },
        },
        time::Duration,
    };

    async fn service_with_tender(
        is_private: bool,
        allowed_bidders: Vec<Address>,
    ) -> (Service, access::service::Service, entities::Tender) {
        let mut db = MockDatabase::new();
        db.expect_add_tender().returning(|_, _| Ok(()));
        db.expect_add_bid().returning(|_| Ok(()));
        let (service, access_service) =
            Service::new_with_mocks(db, access::repository::MockDatabase::new());
        let tender = service
            .create_tender(CreateTenderInput {
                caller: "owner".to_string(),
                title: "Road resurfacing".to_string(),
                description: "Resurfacing of 4.2km of municipal roads".to_string(),
                deadline: OffsetDateTime::now_utc() + Duration::days(7),
                min_bid: 100,
                document_hash: String::new(),
                is_private,
                allowed_bidders,
            })
            .await
            .unwrap();
        (service, access_service, tender)
    }

    fn bid_input(tender_id: u64, bidder: &str, amount: u64) -> SubmitBidInput {
        SubmitBidInput {
            caller: bidder.to_string(),
            tender_id,
            amount,
            proposal: "proposal".to_string(),
        }
    }

    #[tokio::test]
    async fn test_bid_ids_increase_from_one() {
        let (service, _, tender) = service_with_tender(false, vec![]).await;
        let first = service
            .submit_bid(bid_input(tender.id, "bidder-1", 150))
            .await
            .unwrap();
        let second = service
            .submit_bid(bid_input(tender.id, "bidder-2", 120))
            .await
            .unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, entities::BidStatus::Pending);
    }

    #[tokio::test]
    async fn test_bid_below_minimum_rejected() {
        let (service, _, tender) = service_with_tender(false, vec![]).await;
        let result = service.submit_bid(bid_input(tender.id, "bidder-1", 99)).await;
        assert!(matches!(
            result,
            Err(RestError::BidTooLow {
                amount: 99,
                min_bid: 100,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_bid_after_deadline_rejected() {
        let (service, _, tender) = service_with_tender(false, vec![]).await;
        {
            let mut tenders = service.repo.in_memory_store.tenders.write().await;
            tenders.get_mut(&tender.id).unwrap().deadline =
                OffsetDateTime::now_utc() - Duration::minutes(1);
        }
        let result = service.submit_bid(bid_input(tender.id, "bidder-1", 150)).await;
        assert!(matches!(result, Err(RestError::DeadlinePassed { .. })));
    }

    #[tokio::test]
    async fn test_bid_on_unknown_tender_rejected() {
        let (service, _, _) = service_with_tender(false, vec![]).await;
        let result = service.submit_bid(bid_input(42, "bidder-1", 150)).await;
        assert!(matches!(result, Err(RestError::TenderNotFound(42))));
    }

    #[tokio::test]
    async fn test_private_tender_rejects_unapproved_bidder() {
        let (service, _, tender) =
            service_with_tender(true, vec!["vendor-1".to_string()]).await;
        let result = service.submit_bid(bid_input(tender.id, "vendor-2", 150)).await;
        assert!(matches!(result, Err(RestError::Forbidden)));
    }

    #[tokio::test]
    async fn test_approved_bidder_can_bid_after_approval() {
        let mut db = MockDatabase::new();
        db.expect_add_tender().returning(|_, _| Ok(()));
        db.expect_add_bid().returning(|_| Ok(()));
        let mut access_db = access::repository::MockDatabase::new();
        access_db.expect_add_admin().returning(|_, _| Ok(()));
        access_db
            .expect_add_approved_vendors()
            .returning(|_, _, _| Ok(()));
        let (service, access_service) = Service::new_with_mocks(db, access_db);
        access_service
            .ensure_bootstrap_admin(&"admin".to_string())
            .await
            .unwrap();
        let tender = service
            .create_tender(CreateTenderInput {
                caller: "owner".to_string(),
                title: "Road resurfacing".to_string(),
                description: "Resurfacing of 4.2km of municipal roads".to_string(),
                deadline: OffsetDateTime::now_utc() + Duration::days(7),
                min_bid: 100,
                document_hash: String::new(),
                is_private: true,
                allowed_bidders: vec!["vendor-1".to_string()],
            })
            .await
            .unwrap();

        // vendor-2 is rejected until an admin approves them mid-tender.
        assert!(matches!(
            service.submit_bid(bid_input(tender.id, "vendor-2", 150)).await,
            Err(RestError::Forbidden)
        ));
        access_service
            .approve_vendor(crate::access::service::approve_vendor::ApproveVendorInput {
                caller:    "admin".to_string(),
                tender_id: tender.id,
                vendor:    "vendor-2".to_string(),
            })
            .await
            .unwrap();
        let bid = service
            .submit_bid(bid_input(tender.id, "vendor-2", 150))
            .await
            .unwrap();
        assert_eq!(bid.bidder, "vendor-2");
    }
}
