use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::{
            Address,
            Amount,
            DocumentHash,
        },
        notification::TenderEvent,
        tender::entities,
    },
    std::collections::HashSet,
    time::OffsetDateTime,
};

pub struct CreateTenderInput {
    pub caller:          Address,
    pub title:           String,
    pub description:     String,
    pub deadline:        OffsetDateTime,
    pub min_bid:         Amount,
    pub document_hash:   DocumentHash,
    pub is_private:      bool,
    pub allowed_bidders: Vec<Address>,
}

impl Service {
    #[tracing::instrument(skip_all, fields(owner = %input.caller, tender_id))]
    pub async fn create_tender(
        &self,
        input: CreateTenderInput,
    ) -> Result<entities::Tender, RestError> {
        let now = OffsetDateTime::now_utc();
        self.validate_create_tender(&input, now)?;

        let mut seen = HashSet::new();
        let allowed_bidders: Vec<Address> = input
            .allowed_bidders
            .into_iter()
            .filter(|vendor| seen.insert(vendor.clone()))
            .collect();

        let tender = self
            .repo
            .add_tender(entities::TenderCreate {
                title:           input.title,
                description:     input.description,
                deadline:        input.deadline,
                min_bid:         input.min_bid,
                owner:           input.caller,
                document_hash:   input.document_hash,
                is_private:      input.is_private,
                allowed_bidders: allowed_bidders.clone(),
                creation_time:   now,
            })
            .await?;
        tracing::Span::current().record("tender_id", tender.id);
        if tender.is_private {
            self.access.seed_allow_list(tender.id, &allowed_bidders).await;
        }
        self.emit(TenderEvent::TenderCreated {
            tender: tender.clone(),
        });
        Ok(tender)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            access,
            tender::repository::MockDatabase,
        },
        time::Duration,
    };

    fn create_input(caller: &str) -> CreateTenderInput {
        CreateTenderInput {
            caller:          caller.to_string(),
            title:           "Road resurfacing".to_string(),
            description:     "Resurfacing of 4.2km of municipal roads".to_string(),
            deadline:        OffsetDateTime::now_utc() + Duration::days(7),
            min_bid:         100,
            document_hash:   String::new(),
            is_private:      false,
            allowed_bidders: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_tender_assigns_sequential_ids() {
        let mut db = MockDatabase::new();
        db.expect_add_tender().returning(|_, _| Ok(()));
        let (service, _) = Service::new_with_mocks(db, access::repository::MockDatabase::new());

        let first = service.create_tender(create_input("owner")).await.unwrap();
        let second = service.create_tender(create_input("owner")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, entities::TenderStatus::Active);
        assert_eq!(first.winning_bid_id, 0);
        assert_eq!(first.bids_count, 0);
    }

    #[tokio::test]
    async fn test_create_tender_rejects_empty_title() {
        let (service, _) = Service::new_with_mocks(
            MockDatabase::new(),
            access::repository::MockDatabase::new(),
        );
        let result = service
            .create_tender(CreateTenderInput {
                title: "  ".to_string(),
                ..create_input("owner")
            })
            .await;
        assert!(matches!(result, Err(RestError::BadParameters(_))));
    }

    #[tokio::test]
    async fn test_create_tender_rejects_past_deadline() {
        let (service, _) = Service::new_with_mocks(
            MockDatabase::new(),
            access::repository::MockDatabase::new(),
        );
        let result = service
            .create_tender(CreateTenderInput {
                deadline: OffsetDateTime::now_utc() - Duration::minutes(1),
                ..create_input("owner")
            })
            .await;
        assert!(matches!(result, Err(RestError::BadParameters(_))));
    }

    #[tokio::test]
    async fn test_create_tender_rejects_zero_min_bid() {
        let (service, _) = Service::new_with_mocks(
            MockDatabase::new(),
            access::repository::MockDatabase::new(),
        );
        let result = service
            .create_tender(CreateTenderInput {
                min_bid: 0,
                ..create_input("owner")
            })
            .await;
        assert!(matches!(result, Err(RestError::BadParameters(_))));
    }

    #[tokio::test]
    async fn test_private_tender_requires_allow_list() {
        let (service, _) = Service::new_with_mocks(
            MockDatabase::new(),
            access::repository::MockDatabase::new(),
        );
        let result = service
            .create_tender(CreateTenderInput {
                is_private: true,
                allowed_bidders: vec![],
                ..create_input("owner")
            })
            .await;
        assert!(matches!(result, Err(RestError::BadParameters(_))));
    }

    #[tokio::test]
    async fn test_private_tender_seeds_allow_list() {
        let mut db = MockDatabase::new();
        db.expect_add_tender().returning(|_, _| Ok(()));
        let (service, access_service) =
            Service::new_with_mocks(db, access::repository::MockDatabase::new());

        let tender = service
            .create_tender(CreateTenderInput {
                is_private: true,
                allowed_bidders: vec!["vendor-1".to_string(), "vendor-1".to_string()],
                ..create_input("owner")
            })
            .await
            .unwrap();
        assert!(access_service.is_approved_vendor(tender.id, &"vendor-1".to_string()).await);
        assert!(!access_service.is_approved_vendor(tender.id, &"vendor-2".to_string()).await);
    }
}
