use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::Address,
        notification::TenderEvent,
    },
};

pub struct VerifyVendorInput {
    pub caller: Address,
    pub vendor: Address,
}

impl Service {
    #[tracing::instrument(skip_all, fields(caller = %input.caller, vendor = %input.vendor))]
    pub async fn verify_vendor(&self, input: VerifyVendorInput) -> Result<(), RestError> {
        self.assert_admin(&input.caller).await?;
        self.repo
            .add_verified_vendor(&input.vendor, &input.caller)
            .await?;
        self.emit(TenderEvent::VendorVerified {
            vendor: input.vendor,
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
            tender,
        },
    };

    #[tokio::test]
    async fn test_only_admins_verify_vendors() {
        let mut access_db = access::repository::MockDatabase::new();
        access_db.expect_add_admin().returning(|_, _| Ok(()));
        access_db
            .expect_add_verified_vendor()
            .returning(|_, _| Ok(()));
        let (_, service) = tender::service::Service::new_with_mocks(
            tender::repository::MockDatabase::new(),
            access_db,
        );
        service
            .ensure_bootstrap_admin(&"admin".to_string())
            .await
            .unwrap();

        let denied = service
            .verify_vendor(VerifyVendorInput {
                caller: "outsider".to_string(),
                vendor: "vendor-1".to_string(),
            })
            .await;
        assert!(matches!(denied, Err(RestError::Forbidden)));
        assert!(!service.is_verified_vendor(&"vendor-1".to_string()).await);

        service
            .verify_vendor(VerifyVendorInput {
                caller: "admin".to_string(),
                vendor: "vendor-1".to_string(),
            })
            .await
            .unwrap();
        assert!(service.is_verified_vendor(&"vendor-1".to_string()).await);
    }
}
