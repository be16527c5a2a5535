use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::Address,
        notification::TenderEvent,
    },
};

pub struct RemoveAdminInput {
    pub caller: Address,
    pub admin:  Address,
}

impl Service {
    #[tracing::instrument(skip_all, fields(caller = %input.caller, admin = %input.admin))]
    pub async fn remove_admin(&self, input: RemoveAdminInput) -> Result<(), RestError> {
        self.assert_admin(&input.caller).await?;
        self.repo.remove_admin(&input.admin).await?;
        self.emit(TenderEvent::AdminRemoved {
            admin:      input.admin,
            removed_by: input.caller,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{
            super::add_admin::AddAdminInput,
            *,
        },
        crate::{
            access,
            tender,
        },
    };

    async fn service_with_admins(admins: &[&str]) -> access::service::Service {
        let mut access_db = access::repository::MockDatabase::new();
        access_db.expect_add_admin().returning(|_, _| Ok(()));
        access_db.expect_remove_admin().returning(|_| Ok(()));
        let (_, access_service) = tender::service::Service::new_with_mocks(
            tender::repository::MockDatabase::new(),
            access_db,
        );
        access_service
            .ensure_bootstrap_admin(&admins[0].to_string())
            .await
            .unwrap();
        for admin in &admins[1..] {
            access_service
                .add_admin(AddAdminInput {
                    caller: admins[0].to_string(),
                    admin:  admin.to_string(),
                })
                .await
                .unwrap();
        }
        access_service
    }

    #[tokio::test]
    async fn test_admin_can_remove_another_admin() {
        let service = service_with_admins(&["admin-1", "admin-2"]).await;
        service
            .remove_admin(RemoveAdminInput {
                caller: "admin-1".to_string(),
                admin:  "admin-2".to_string(),
            })
            .await
            .unwrap();
        assert!(!service.is_admin(&"admin-2".to_string()).await);
    }

    #[tokio::test]
    async fn test_removing_last_admin_fails() {
        let service = service_with_admins(&["admin-1", "admin-2"]).await;
        service
            .remove_admin(RemoveAdminInput {
                caller: "admin-1".to_string(),
                admin:  "admin-2".to_string(),
            })
            .await
            .unwrap();
        let result = service
            .remove_admin(RemoveAdminInput {
                caller: "admin-1".to_string(),
                admin:  "admin-1".to_string(),
            })
            .await;
        assert!(matches!(result, Err(RestError::LastAdmin)));
        assert!(service.is_admin(&"admin-1".to_string()).await);
    }

    #[tokio::test]
    async fn test_non_admin_cannot_remove_admins() {
        let service = service_with_admins(&["admin-1", "admin-2"]).await;
        let result = service
            .remove_admin(RemoveAdminInput {
                caller: "outsider".to_string(),
                admin:  "admin-2".to_string(),
            })
            .await;
        assert!(matches!(result, Err(RestError::Forbidden)));
    }
}
