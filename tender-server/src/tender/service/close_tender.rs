use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::{
            Address,
            TenderId,
            NO_WINNING_BID,
        },
        notification::TenderEvent,
        tender::entities,
    },
};

pub struct CloseTenderInput {
    pub caller:    Address,
    pub tender_id: TenderId,
}

impl Service {
    /// Closes the tender and selects the winner: the lowest bid amount,
    /// ties broken by earliest submission, then lowest bid id. A tender
    /// with no bids closes cleanly with no winner.
    #[tracing::instrument(skip_all, fields(tender_id = input.tender_id, winning_bid_id))]
    pub async fn close_tender(
        &self,
        input: CloseTenderInput,
    ) -> Result<entities::TenderAward, RestError> {
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

        let bids = self.repo.get_all_tender_bids(tender.id).await;
        let winner = entities::select_winner(&bids);
        let award = entities::TenderAward {
            tender_id:      tender.id,
            winning_bid_id: winner.map_or(NO_WINNING_BID, |bid| bid.id),
            winner:         winner.map(|bid| bid.bidder.clone()),
            winning_amount: winner.map(|bid| bid.amount),
        };
        tracing::Span::current().record("winning_bid_id", award.winning_bid_id);

        let closed = self
            .repo
            .conclude_tender(&tender, award.winning_bid_id)
            .await?;
        drop(_lock);
        self.repo.remove_tender_lock(&input.tender_id).await;

        self.emit(TenderEvent::TenderClosed {
            tender: closed,
            award:  award.clone(),
        });
        Ok(award)
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

    async fn service_with_tender() -> (Service, entities::Tender) {
        let mut db = MockDatabase::new();
        db.expect_add_tender().returning(|_, _| Ok(()));
        db.expect_add_bid().returning(|_| Ok(()));
        db.expect_conclude_tender().returning(|_| Ok(()));
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

    async fn submit(service: &Service, tender_id: u64, bidder: &str, amount: u64) {
        service
            .submit_bid(SubmitBidInput {
                caller: bidder.to_string(),
                tender_id,
                amount,
                proposal: "proposal".to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_lowest_bid_wins() {
        let (service, tender) = service_with_tender().await;
        submit(&service, tender.id, "bidder-a", 150).await;
        submit(&service, tender.id, "bidder-b", 150).await;
        submit(&service, tender.id, "bidder-c", 120).await;

        let award = service
            .close_tender(CloseTenderInput {
                caller:    "owner".to_string(),
                tender_id: tender.id,
            })
            .await
            .unwrap();
        assert_eq!(award.winning_bid_id, 3);
        assert_eq!(award.winner.as_deref(), Some("bidder-c"));
        assert_eq!(award.winning_amount, Some(120));

        let closed = service.repo.get_tender(tender.id).await.unwrap();
        assert_eq!(closed.status, entities::TenderStatus::Closed);
        assert_eq!(closed.winning_bid_id, 3);

        let bids = service.repo.get_all_tender_bids(tender.id).await;
        assert_eq!(bids[0].status, entities::BidStatus::Lost);
        assert_eq!(bids[1].status, entities::BidStatus::Lost);
        assert_eq!(bids[2].status, entities::BidStatus::Won);
    }

    #[tokio::test]
    async fn test_amount_tie_goes_to_earliest_bid() {
        let (service, tender) = service_with_tender().await;
        submit(&service, tender.id, "bidder-a", 150).await;
        submit(&service, tender.id, "bidder-b", 150).await;

        let award = service
            .close_tender(CloseTenderInput {
                caller:    "owner".to_string(),
                tender_id: tender.id,
            })
            .await
            .unwrap();
        assert_eq!(award.winning_bid_id, 1);
        assert_eq!(award.winner.as_deref(), Some("bidder-a"));
    }

    #[tokio::test]
    async fn test_close_without_bids_yields_no_winner() {
        let (service, tender) = service_with_tender().await;
        let award = service
            .close_tender(CloseTenderInput {
                caller:    "owner".to_string(),
                tender_id: tender.id,
            })
            .await
            .unwrap();
        assert_eq!(award.winning_bid_id, 0);
        assert_eq!(award.winner, None);
        assert_eq!(award.winning_amount, None);
    }

    #[tokio::test]
    async fn test_only_owner_can_close() {
        let (service, tender) = service_with_tender().await;
        let result = service
            .close_tender(CloseTenderInput {
                caller:    "bidder-a".to_string(),
                tender_id: tender.id,
            })
            .await;
        assert!(matches!(result, Err(RestError::Forbidden)));
    }

    #[tokio::test]
    async fn test_second_close_fails_with_invalid_state() {
        let (service, tender) = service_with_tender().await;
        service
            .close_tender(CloseTenderInput {
                caller:    "owner".to_string(),
                tender_id: tender.id,
            })
            .await
            .unwrap();
        let result = service
            .close_tender(CloseTenderInput {
                caller:    "owner".to_string(),
                tender_id: tender.id,
            })
            .await;
        assert!(matches!(
            result,
            Err(RestError::InvalidState {
                status: entities::TenderStatus::Closed,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_no_bids_accepted_after_close() {
        let (service, tender) = service_with_tender().await;
        service
            .close_tender(CloseTenderInput {
                caller:    "owner".to_string(),
                tender_id: tender.id,
            })
            .await
            .unwrap();
        let result = service
            .submit_bid(SubmitBidInput {
                caller:    "bidder-a".to_string(),
                tender_id: tender.id,
                amount:    150,
                proposal:  "proposal".to_string(),
            })
            .await;
        assert!(matches!(result, Err(RestError::InvalidState { .. })));
    }
}
