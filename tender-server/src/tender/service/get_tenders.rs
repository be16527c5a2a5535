use {
    super::Service,
    crate::tender::entities,
};

pub struct GetTendersInput {
    pub offset: u64,
    pub limit:  Option<u64>,
    pub status: Option<entities::TenderStatus>,
}

impl Service {
    /// Tender metadata is world-readable, private tenders included; only
    /// their bid lists are restricted.
    pub async fn get_tenders(&self, input: GetTendersInput) -> (Vec<entities::Tender>, u64) {
        let limit = self.clamp_page_limit(input.limit);
        self.repo
            .get_tenders(input.offset, limit, input.status)
            .await
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
                    cancel_tender::CancelTenderInput,
                    create_tender::CreateTenderInput,
                    Service,
                },
            },
        },
        time::{
            Duration,
            OffsetDateTime,
        },
    };

    #[tokio::test]
    async fn test_pagination_and_status_filter() {
        let mut db = MockDatabase::new();
        db.expect_add_tender().returning(|_, _| Ok(()));
        db.expect_cancel_tender().returning(|_| Ok(()));
        let (service, _) =
            Service::new_with_mocks(db, access::repository::MockDatabase::new());
        for i in 0..5 {
            service
                .create_tender(CreateTenderInput {
                    caller:          "owner".to_string(),
                    title:           format!("Tender {i}"),
                    description:     "description".to_string(),
                    deadline:        OffsetDateTime::now_utc() + Duration::days(7),
                    min_bid:         100,
                    document_hash:   String::new(),
                    is_private:      false,
                    allowed_bidders: vec![],
                })
                .await
                .unwrap();
        }
        service
            .cancel_tender(CancelTenderInput {
                caller:    "owner".to_string(),
                tender_id: 2,
            })
            .await
            .unwrap();

        let (page, total) = service
            .get_tenders(GetTendersInput {
                offset: 1,
                limit:  Some(2),
                status: None,
            })
            .await;
        assert_eq!(total, 5);
        assert_eq!(page.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 3]);

        let (active, active_total) = service
            .get_tenders(GetTendersInput {
                offset: 0,
                limit:  None,
                status: Some(entities::TenderStatus::Active),
            })
            .await;
        assert_eq!(active_total, 4);
        assert!(active.iter().all(|t| t.id != 2));
    }
}
