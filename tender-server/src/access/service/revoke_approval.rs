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

pub struct RevokeApprovalInput {
    pub caller:    Address,
    pub tender_id: TenderId,
    pub vendor:    Address,
}

impl Service {
    /// Bids the vendor already submitted stay valid and can still win;
    /// only future submissions are blocked.
    #[tracing::instrument(skip_all, fields(tender_id = input.tender_id, vendor = %input.vendor))]
    pub async fn revoke_approval(&self, input: RevokeApprovalInput) -> Result<(), RestError> {
        let tender = self.get_private_active_tender(input.tender_id).await?;
        self.assert_admin_or_owner(&input.caller, &tender.owner)
            .await?;
        self.repo
            .remove_approved_vendor(input.tender_id, &input.vendor)
            .await?;
        self.emit(TenderEvent::VendorApprovalRevoked {
            tender_id:  input.tender_id,
            vendor:     input.vendor,
            revoked_by: input.caller,
        });
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
                self,
                service::{
                    close_tender::CloseTenderInput,
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
    async fn test_revocation_does_not_invalidate_existing_bids() {
        let mut tender_db = tender::repository::MockDatabase::new();
        tender_db.expect_add_tender().returning(|_, _| Ok(()));
        tender_db.expect_add_bid().returning(|_| Ok(()));
        tender_db.expect_conclude_tender().returning(|_| Ok(()));
        let mut access_db = access::repository::MockDatabase::new();
        access_db
            .expect_remove_approved_vendor()
            .returning(|_, _| Ok(()));
        let (tender_service, access_service) =
            tender::service::Service::new_with_mocks(tender_db, access_db);

        let tender = tender_service
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
        tender_service
            .submit_bid(SubmitBidInput {
                caller:    "vendor-1".to_string(),
                tender_id: tender.id,
                amount:    150,
                proposal:  "proposal".to_string(),
            })
            .await
            .unwrap();

        access_service
            .revoke_approval(RevokeApprovalInput {
                caller:    "owner".to_string(),
                tender_id: tender.id,
                vendor:    "vendor-1".to_string(),
            })
            .await
            .unwrap();

        // The revoked vendor cannot submit again...
        let rejected = tender_service
            .submit_bid(SubmitBidInput {
                caller:    "vendor-1".to_string(),
                tender_id: tender.id,
                amount:    140,
                proposal:  "second proposal".to_string(),
            })
            .await;
        assert!(matches!(rejected, Err(RestError::Forbidden)));

        // ...but the bid already accepted stays valid and can still win.
        let award = tender_service
            .close_tender(CloseTenderInput {
                caller:    "owner".to_string(),
                tender_id: tender.id,
            })
            .await
            .unwrap();
        assert_eq!(award.winner.as_deref(), Some("vendor-1"));
    }
}
