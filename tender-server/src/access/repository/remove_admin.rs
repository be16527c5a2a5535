use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::Address,
    },
};

impl Repository {
    /// The membership and last-admin checks happen under the write lock,
    /// so the admin set can never be emptied by concurrent removals.
    pub async fn remove_admin(&self, admin: &Address) -> Result<(), RestError> {
        let mut admins = self.in_memory_store.admins.write().await;
        if !admins.contains(admin) {
            return Err(RestError::BadParameters(format!("{admin} is not an admin")));
        }
        if admins.len() == 1 {
            return Err(RestError::LastAdmin);
        }
        self.db.remove_admin(admin).await?;
        admins.remove(admin);
        Ok(())
    }
}
