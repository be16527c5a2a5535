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

pub struct ApproveVendorInput {
    pub caller:    Address,
    pub tender_id: TenderId,
    pub vendor:    Address,
}

impl Service {
    #[tracing::instrument(skip_all, fields(tender_id = input.tender_id, vendor = %input.vendor))]
    pub async fn approve_vendor(&self, input: ApproveVendorInput) -> Result<(), RestError> {
        let tender = self.get_private_active_tender(input.tender_id).await?;
        self.assert_admin_or_owner(&input.caller, &tender.owner)
            .await?;
        let added = self
            .repo
            .approve_vendors(input.tender_id, &[input.vendor.clone()], &input.caller)
            .await?;
        if added.is_empty() {
            return Err(RestError::BadParameters(format!(
                "{} is already approved for tender {}",
                input.vendor, input.tender_id
            )));
        }
        self.emit(TenderEvent::VendorApproved {
            tender_id:   input.tender_id,
            vendor:      input.vendor,
            approved_by: input.caller,
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
                },
            },
        },
        time::{
            Duration,
            OffsetDateTime,
        },
    };

    async fn setup(
        is_private: bool,
    ) -> (
        tender::service::Service,
        access::service::Service,
        tender::entities::Tender,
    ) {
        let mut tender_db = tender::repository::MockDatabase::new();
        tender_db.expect_add_tender().returning(|_, _| Ok(()));
        tender_db.expect_conclude_tender().returning(|_| Ok(()));
        let mut access_db = access::repository::MockDatabase::new();
        access_db.expect_add_admin().returning(|_, _| Ok(()));
        access_db
            .expect_add_approved_vendors()
            .returning(|_, _, _| Ok(()));
        let (tender_service, access_service) =
            tender::service::Service::new_with_mocks(tender_db, access_db);
        access_service
            .ensure_bootstrap_admin(&"admin".to_string())
            .await
            .unwrap();
        let tender = tender_service
            .create_tender(CreateTenderInput {
                caller:          "owner".to_string(),
                title:           "Confidential works".to_string(),
                description:     "Restricted procurement".to_string(),
                deadline:        OffsetDateTime::now_utc() + Duration::days(7),
                min_bid:         100,
                document_hash:   String::new(),
                is_private,
                allowed_bidders: if is_private {
                    vec!["vendor-1".to_string()]
                } else {
                    vec![]
                },
            })
            .await
            .unwrap();
        (tender_service, access_service, tender)
    }

    fn approve(caller: &str, tender_id: u64, vendor: &str) -> ApproveVendorInput {
        ApproveVendorInput {
            caller:    caller.to_string(),
            tender_id,
            vendor:    vendor.to_string(),
        }
    }

    #[tokio::test]
    async fn test_owner_and_admin_can_approve() {
        let (_, access_service, tender) = setup(true).await;
        access_service
            .approve_vendor(approve("owner", tender.id, "vendor-2"))
            .await
            .unwrap();
        access_service
            .approve_vendor(approve("admin", tender.id, "vendor-3"))
            .await
            .unwrap();
        assert!(access_service.is_approved_vendor(tender.id, &"vendor-2".to_string()).await);
        assert!(access_service.is_approved_vendor(tender.id, &"vendor-3".to_string()).await);
    }

    #[tokio::test]
    async fn test_outsider_cannot_approve() {
        let (_, access_service, tender) = setup(true).await;
        let result = access_service
            .approve_vendor(approve("outsider", tender.id, "vendor-2"))
            .await;
        assert!(matches!(result, Err(RestError::Forbidden)));
    }

    #[tokio::test]
    async fn test_public_tender_rejects_approval() {
        let (_, access_service, tender) = setup(false).await;
        let result = access_service
            .approve_vendor(approve("owner", tender.id, "vendor-2"))
            .await;
        assert!(matches!(result, Err(RestError::BadParameters(_))));
    }

    #[tokio::test]
    async fn test_closed_tender_rejects_approval() {
        let (tender_service, access_service, tender) = setup(true).await;
        tender_service
            .close_tender(CloseTenderInput {
                caller:    "owner".to_string(),
                tender_id: tender.id,
            })
            .await
            .unwrap();
        let result = access_service
            .approve_vendor(approve("owner", tender.id, "vendor-2"))
            .await;
        assert!(matches!(result, Err(RestError::InvalidState { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_approval_rejected() {
        let (_, access_service, tender) = setup(true).await;
        let result = access_service
            .approve_vendor(approve("owner", tender.id, "vendor-1"))
            .await;
        assert!(matches!(result, Err(RestError::BadParameters(_))));
    }
}
