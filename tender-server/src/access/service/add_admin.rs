use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::Address,
        notification::TenderEvent,
    },
};

pub struct AddAdminInput {
    pub caller: Address,
    pub admin:  Address,
}

impl Service {
    #[tracing::instrument(skip_all, fields(caller = %input.caller, admin = %input.admin))]
    pub async fn add_admin(&self, input: AddAdminInput) -> Result<(), RestError> {
        self.assert_admin(&input.caller).await?;
        self.repo.add_admin(&input.admin, &input.caller).await?;
        self.emit(TenderEvent::AdminAdded {
            admin:    input.admin,
            added_by: input.caller,
        });
        Ok(())
    }
}
