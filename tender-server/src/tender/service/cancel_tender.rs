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

pub struct CancelTenderInput {
    pub caller:    Address,
    pub tender_id: TenderId,
}

impl Service {
    /// Cancels an active tender. A winner is never assigned, regardless of
    /// how many bids were submitted.
    #[tracing::instrument(skip_all, fields(tender_id = input.tender_id))]
    pub async fn cancel_tender(&self, input: CancelTenderInput) -> Result<(), RestError> {
        let tender_lock = self.repo.get_or_create_tender_lock(input.tender_id).await;
        let _lock = tender_lock.lock().await;

        let tender = self
            .repo
            .get_tender(input.tender_id)
            .await
            .ok_or(RestError::TenderNotFound(input.tender_id))?;
        if tender.owner != input.caller {
            return Err(RestError::Forbidden);
        }
        if !tender.status.is_active() {
            return Err(RestError::InvalidState {
                tender_id: tender.id,
                status:    tender.status,
            });
        }

        let cancelled = self.repo.cancel_tender(&tender).await?;
        drop(_lock);
        self.repo.remove_tender_lock(&input.tender_id).await;

        self.emit(TenderEvent::TenderCancelled { tender: cancelled });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            access,
            tender::{
                entities,
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

    async fn service_with_tender() -> (Service, entities::Tender) {
        let mut db = MockDatabase::new();
        db.expect_add_tender().returning(|_, _| Ok(()));
        db.expect_add_bid().returning(|_| Ok(()));
        db.expect_cancel_tender().returning(|_| Ok(()));
        let (service, _) =
            Service::new_with_mocks(db, access::repository::MockDatabase::new());
        let tender = service
            .create_tender(CreateTenderInput {
                caller:          "owner".to_string(),
                title:           "Road resurfacing".to_string(),
                description:     "Resurfacing of 4.2km of municipal roads".to_string(),
                deadline:        OffsetDateTime::now_utc() + Duration::days(7),
                min_bid:         100,
                document_hash:   String::new(),
                is_private:      false,
                allowed_bidders: vec![],
            })
            .await
            .unwrap();
        (service, tender)
    }

    #[tokio::test]
    async fn test_cancel_with_bids_assigns_no_winner() {
        let (service, tender) = service_with_tender().await;
        for (bidder, amount) in [("bidder-a", 150), ("bidder-b", 120)] {
            service
                .submit_bid(SubmitBidInput {
                    caller:    bidder.to_string(),
                    tender_id: tender.id,
                    amount,
                    proposal:  "proposal".to_string(),
                })
                .await
                .unwrap();
        }

        service
            .cancel_tender(CancelTenderInput {
                caller:    "owner".to_string(),
                tender_id: tender.id,
            })
            .await
            .unwrap();

        let cancelled = service.repo.get_tender(tender.id).await.unwrap();
        assert_eq!(cancelled.status, entities::TenderStatus::Cancelled);
        assert_eq!(cancelled.winning_bid_id, 0);
        let bids = service.repo.get_all_tender_bids(tender.id).await;
        assert!(bids
            .iter()
            .all(|bid| bid.status == entities::BidStatus::Lost));
    }

    #[tokio::test]
    async fn test_only_owner_can_cancel() {
        let (service, tender) = service_with_tender().await;
        let result = service
            .cancel_tender(CancelTenderInput {
                caller:    "bidder-a".to_string(),
                tender_id: tender.id,
            })
            .await;
        assert!(matches!(result, Err(RestError::Forbidden)));
    }

    #[tokio::test]
    async fn test_cancelled_tender_rejects_further_operations() {
        let (service, tender) = service_with_tender().await;
        service
            .cancel_tender(CancelTenderInput {
                caller:    "owner".to_string(),
                tender_id: tender.id,
            })
            .await
            .unwrap();

        let bid = service
            .submit_bid(SubmitBidInput {
                caller:    "bidder-a".to_string(),
                tender_id: tender.id,
                amount:    150,
                proposal:  "proposal".to_string(),
            })
            .await;
        assert!(matches!(bid, Err(RestError::InvalidState { .. })));

        let cancel_again = service
            .cancel_tender(CancelTenderInput {
                caller:    "owner".to_string(),
                tender_id: tender.id,
            })
            .await;
        assert!(matches!(
            cancel_again,
            Err(RestError::InvalidState {
                status: entities::TenderStatus::Cancelled,
                ..
            })
        ));
    }
}
