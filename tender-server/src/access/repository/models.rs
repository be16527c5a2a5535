#[cfg(test)]
use mockall::automock;
use {
    crate::{
        api::RestError,
        kernel::{
            db::DB,
            entities::{
                Address,
                TenderId,
            },
        },
    },
    anyhow::anyhow,
    axum::async_trait,
    sqlx::FromRow,
    std::fmt::Debug,
    tracing::instrument,
};

#[derive(Clone, FromRow, Debug)]
pub struct ApprovedVendor {
    pub tender_id: i64,
    pub vendor:    String,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn add_admin(&self, admin: &Address, added_by: &Address) -> Result<(), RestError>;
    async fn remove_admin(&self, admin: &Address) -> Result<(), RestError>;
    async fn add_verified_vendor(
        &self,
        vendor: &Address,
        verified_by: &Address,
    ) -> Result<(), RestError>;
    async fn remove_verified_vendor(&self, vendor: &Address) -> Result<(), RestError>;
    async fn add_approved_vendors(
        &self,
        tender_id: TenderId,
        vendors: &[Address],
        approved_by: &Address,
    ) -> Result<(), RestError>;
    async fn remove_approved_vendor(
        &self,
        tender_id: TenderId,
        vendor: &Address,
    ) -> Result<(), RestError>;
    async fn get_admins(&self) -> anyhow::Result<Vec<Address>>;
    async fn get_verified_vendors(&self) -> anyhow::Result<Vec<Address>>;
    async fn get_approved_vendors(&self) -> anyhow::Result<Vec<ApprovedVendor>>;
}

#[async_trait]
impl Database for DB {
    #[instrument(
        target = "metrics",
        name = "db_add_admin",
        fields(category = "db_queries", result = "success", name = "add_admin"),
        skip_all
    )]
    async fn add_admin(&self, admin: &Address, added_by: &Address) -> Result<(), RestError> {
        sqlx::query("INSERT INTO admin (admin, added_by) VALUES ($1, $2)")
            .bind(admin)
            .bind(added_by)
            .execute(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), admin, "DB: Failed to insert admin");
                RestError::TemporarilyUnavailable
            })?;
        Ok(())
    }

    #[instrument(
        target = "metrics",
        name = "db_remove_admin",
        fields(category = "db_queries", result = "success", name = "remove_admin"),
        skip_all
    )]
    async fn remove_admin(&self, admin: &Address) -> Result<(), RestError> {
        sqlx::query("DELETE FROM admin WHERE admin = $1")
            .bind(admin)
            .execute(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), admin, "DB: Failed to delete admin");
                RestError::TemporarilyUnavailable
            })?;
        Ok(())
    }

    #[instrument(
        target = "metrics",
        name = "db_add_verified_vendor",
        fields(category = "db_queries", result = "success", name = "add_verified_vendor"),
        skip_all
    )]
    async fn add_verified_vendor(
        &self,
        vendor: &Address,
        verified_by: &Address,
    ) -> Result<(), RestError> {
        sqlx::query("INSERT INTO verified_vendor (vendor, verified_by) VALUES ($1, $2)")
            .bind(vendor)
            .bind(verified_by)
            .execute(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), vendor, "DB: Failed to insert vendor");
                RestError::TemporarilyUnavailable
            })?;
        Ok(())
    }

    #[instrument(
        target = "metrics",
        name = "db_remove_verified_vendor",
        fields(category = "db_queries", result = "success", name = "remove_verified_vendor"),
        skip_all
    )]
    async fn remove_verified_vendor(&self, vendor: &Address) -> Result<(), RestError> {
        sqlx::query("DELETE FROM verified_vendor WHERE vendor = $1")
            .bind(vendor)
            .execute(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), vendor, "DB: Failed to delete vendor");
                RestError::TemporarilyUnavailable
            })?;
        Ok(())
    }

    #[instrument(
        target = "metrics",
        name = "db_add_approved_vendors",
        fields(category = "db_queries", result = "success", name = "add_approved_vendors"),
        skip_all
    )]
    async fn add_approved_vendors(
        &self,
        tender_id: TenderId,
        vendors: &[Address],
        approved_by: &Address,
    ) -> Result<(), RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to open transaction");
            RestError::TemporarilyUnavailable
        })?;
        for vendor in vendors {
            sqlx::query(
                "INSERT INTO approved_vendor (tender_id, vendor, approved_by) VALUES ($1, $2, $3)",
            )
            .bind(tender_id as i64)
            .bind(vendor)
            .bind(approved_by)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), vendor, "DB: Failed to insert approval");
                RestError::TemporarilyUnavailable
            })?;
        }
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to commit approvals");
            RestError::TemporarilyUnavailable
        })
    }

    #[instrument(
        target = "metrics",
        name = "db_remove_approved_vendor",
        fields(category = "db_queries", result = "success", name = "remove_approved_vendor"),
        skip_all
    )]
    async fn remove_approved_vendor(
        &self,
        tender_id: TenderId,
        vendor: &Address,
    ) -> Result<(), RestError> {
        sqlx::query("DELETE FROM approved_vendor WHERE tender_id = $1 AND vendor = $2")
            .bind(tender_id as i64)
            .bind(vendor)
            .execute(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), vendor, "DB: Failed to delete approval");
                RestError::TemporarilyUnavailable
            })?;
        Ok(())
    }

    #[instrument(
        target = "metrics",
        name = "db_get_admins",
        fields(category = "db_queries", result = "success", name = "get_admins"),
        skip_all
    )]
    async fn get_admins(&self) -> anyhow::Result<Vec<Address>> {
        sqlx::query_scalar::<_, String>("SELECT admin FROM admin")
            .fetch_all(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                anyhow!("DB: Failed to load admins: {e}")
            })
    }

    #[instrument(
        target = "metrics",
        name = "db_get_verified_vendors",
        fields(category = "db_queries", result = "success", name = "get_verified_vendors"),
        skip_all
    )]
    async fn get_verified_vendors(&self) -> anyhow::Result<Vec<Address>> {
        sqlx::query_scalar::<_, String>("SELECT vendor FROM verified_vendor")
            .fetch_all(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                anyhow!("DB: Failed to load verified vendors: {e}")
            })
    }

    #[instrument(
        target = "metrics",
        name = "db_get_approved_vendors",
        fields(category = "db_queries", result = "success", name = "get_approved_vendors"),
        skip_all
    )]
    async fn get_approved_vendors(&self) -> anyhow::Result<Vec<ApprovedVendor>> {
        sqlx::query_as::<_, ApprovedVendor>("SELECT tender_id, vendor FROM approved_vendor")
            .fetch_all(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                anyhow!("DB: Failed to load approved vendors: {e}")
            })
    }
}
