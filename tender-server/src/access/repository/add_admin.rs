use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::Address,
    },
};

impl Repository {
    pub async fn add_admin(&self, admin: &Address, added_by: &Address) -> Result<(), RestError> {
        let mut admins = self.in_memory_store.admins.write().await;
        if admins.contains(admin) {
            return Err(RestError::BadParameters(format!(
                "{admin} is already an admin"
            )));
        }
        self.db.add_admin(admin, added_by).await?;
        admins.insert(admin.clone());
        Ok(())
    }
}
