#[cfg(test)]
use mockall::automock;
use {
    super::entities,
    crate::{
        api::RestError,
        kernel::{
            db::DB,
            entities::Address,
        },
    },
    anyhow::anyhow,
    axum::async_trait,
    sqlx::FromRow,
    std::fmt::Debug,
    time::OffsetDateTime,
    tracing::instrument,
};

#[derive(Clone, Copy, Debug, PartialEq, sqlx::Type)]
#[sqlx(type_name = "tender_status", rename_all = "lowercase")]
pub enum TenderStatus {
    Active,
    Closed,
    Cancelled,
}

impl From<entities::TenderStatus> for TenderStatus {
    fn from(status: entities::TenderStatus) -> Self {
        match status {
            entities::TenderStatus::Active => TenderStatus::Active,
            entities::TenderStatus::Closed => TenderStatus::Closed,
            entities::TenderStatus::Cancelled => TenderStatus::Cancelled,
        }
    }
}

impl From<TenderStatus> for entities::TenderStatus {
    fn from(status: TenderStatus) -> Self {
        match status {
            TenderStatus::Active => entities::TenderStatus::Active,
            TenderStatus::Closed => entities::TenderStatus::Closed,
            TenderStatus::Cancelled => entities::TenderStatus::Cancelled,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, sqlx::Type)]
#[sqlx(type_name = "bid_status", rename_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Won,
    Lost,
}

impl From<entities::BidStatus> for BidStatus {
    fn from(status: entities::BidStatus) -> Self {
        match status {
            entities::BidStatus::Pending => BidStatus::Pending,
            entities::BidStatus::Won => BidStatus::Won,
            entities::BidStatus::Lost => BidStatus::Lost,
        }
    }
}

impl From<BidStatus> for entities::BidStatus {
    fn from(status: BidStatus) -> Self {
        match status {
            BidStatus::Pending => entities::BidStatus::Pending,
            BidStatus::Won => entities::BidStatus::Won,
            BidStatus::Lost => entities::BidStatus::Lost,
        }
    }
}

#[derive(Clone, FromRow, Debug)]
pub struct Tender {
    pub id:             i64,
    pub title:          String,
    pub description:    String,
    pub deadline:       OffsetDateTime,
    pub min_bid:        i64,
    pub owner:          String,
    pub status:         TenderStatus,
    pub winning_bid_id: i64,
    pub created_at:     OffsetDateTime,
    pub document_hash:  String,
    pub is_private:     bool,
    pub bids_count:     i64,
}

impl Tender {
    pub fn get_tender_entity(&self) -> anyhow::Result<entities::Tender> {
        Ok(entities::Tender {
            id:             self.id.try_into().map_err(|_| anyhow!("invalid tender id"))?,
            title:          self.title.clone(),
            description:    self.description.clone(),
            deadline:       self.deadline,
            min_bid:        self
                .min_bid
                .try_into()
                .map_err(|_| anyhow!("invalid minimum bid"))?,
            owner:          self.owner.clone(),
            status:         self.status.into(),
            winning_bid_id: self
                .winning_bid_id
                .try_into()
                .map_err(|_| anyhow!("invalid winning bid id"))?,
            created_at:     self.created_at,
            document_hash:  self.document_hash.clone(),
            is_private:     self.is_private,
            bids_count:     self
                .bids_count
                .try_into()
                .map_err(|_| anyhow!("invalid bid count"))?,
        })
    }
}

#[derive(Clone, FromRow, Debug)]
pub struct Bid {
    pub tender_id:       i64,
    pub id:              i64,
    pub bidder:          String,
    pub amount:          i64,
    pub proposal:        String,
    pub status:          BidStatus,
    pub submission_time: OffsetDateTime,
}

impl Bid {
    pub fn get_bid_entity(&self) -> anyhow::Result<entities::Bid> {
        Ok(entities::Bid {
            id:              self.id.try_into().map_err(|_| anyhow!("invalid bid id"))?,
            tender_id:       self
                .tender_id
                .try_into()
                .map_err(|_| anyhow!("invalid tender id"))?,
            bidder:          self.bidder.clone(),
            amount:          self
                .amount
                .try_into()
                .map_err(|_| anyhow!("invalid bid amount"))?,
            proposal:        self.proposal.clone(),
            status:          self.status.into(),
            submission_time: self.submission_time,
        })
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn add_tender(
        &self,
        tender: &entities::Tender,
        allowed_bidders: &[Address],
    ) -> Result<(), RestError>;
    async fn add_bid(&self, bid: &entities::Bid) -> Result<(), RestError>;
    async fn conclude_tender(&self, tender: &entities::Tender) -> Result<(), RestError>;
    async fn cancel_tender(&self, tender: &entities::Tender) -> Result<(), RestError>;
    async fn get_tenders(&self) -> anyhow::Result<Vec<Tender>>;
    async fn get_bids(&self) -> anyhow::Result<Vec<Bid>>;
}

#[async_trait]
impl Database for DB {
    #[instrument(
        target = "metrics",
        name = "db_add_tender",
        fields(category = "db_queries", result = "success", name = "add_tender"),
        skip_all
    )]
    async fn add_tender(
        &self,
        tender: &entities::Tender,
        allowed_bidders: &[Address],
    ) -> Result<(), RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to open transaction");
            RestError::TemporarilyUnavailable
        })?;
        sqlx::query(
            "INSERT INTO tender (id, title, description, deadline, min_bid, owner, status, winning_bid_id, created_at, document_hash, is_private, bids_count) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(tender.id as i64)
        .bind(&tender.title)
        .bind(&tender.description)
        .bind(tender.deadline)
        .bind(tender.min_bid as i64)
        .bind(&tender.owner)
        .bind(TenderStatus::from(tender.status))
        .bind(tender.winning_bid_id as i64)
        .bind(tender.created_at)
        .bind(&tender.document_hash)
        .bind(tender.is_private)
        .bind(tender.bids_count as i64)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), tender = ?tender, "DB: Failed to insert tender");
            RestError::TemporarilyUnavailable
        })?;
        for vendor in allowed_bidders {
            sqlx::query(
                "INSERT INTO approved_vendor (tender_id, vendor, approved_by, approval_time) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(tender.id as i64)
            .bind(vendor)
            .bind(&tender.owner)
            .bind(tender.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), vendor, "DB: Failed to seed allow-list");
                RestError::TemporarilyUnavailable
            })?;
        }
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to commit tender insert");
            RestError::TemporarilyUnavailable
        })
    }

    #[instrument(
        target = "metrics",
        name = "db_add_bid",
        fields(category = "db_queries", result = "success", name = "add_bid"),
        skip_all
    )]
    async fn add_bid(&self, bid: &entities::Bid) -> Result<(), RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to open transaction");
            RestError::TemporarilyUnavailable
        })?;
        sqlx::query(
            "INSERT INTO bid (tender_id, id, bidder, amount, proposal, status, submission_time) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(bid.tender_id as i64)
        .bind(bid.id as i64)
        .bind(&bid.bidder)
        .bind(bid.amount as i64)
        .bind(&bid.proposal)
        .bind(BidStatus::from(bid.status))
        .bind(bid.submission_time)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), bid = ?bid, "DB: Failed to insert bid");
            RestError::TemporarilyUnavailable
        })?;
        sqlx::query("UPDATE tender SET bids_count = bids_count + 1 WHERE id = $1")
            .bind(bid.tender_id as i64)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), "DB: Failed to bump bid count");
                RestError::TemporarilyUnavailable
            })?;
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to commit bid insert");
            RestError::TemporarilyUnavailable
        })
    }

    #[instrument(
        target = "metrics",
        name = "db_conclude_tender",
        fields(category = "db_queries", result = "success", name = "conclude_tender"),
        skip_all
    )]
    async fn conclude_tender(&self, tender: &entities::Tender) -> Result<(), RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to open transaction");
            RestError::TemporarilyUnavailable
        })?;
        sqlx::query("UPDATE tender SET status = $1, winning_bid_id = $2 WHERE id = $3")
            .bind(TenderStatus::Closed)
            .bind(tender.winning_bid_id as i64)
            .bind(tender.id as i64)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), "DB: Failed to close tender");
                RestError::TemporarilyUnavailable
            })?;
        sqlx::query("UPDATE bid SET status = CASE WHEN id = $2 THEN $3::bid_status ELSE $4::bid_status END WHERE tender_id = $1")
            .bind(tender.id as i64)
            .bind(tender.winning_bid_id as i64)
            .bind(BidStatus::Won)
            .bind(BidStatus::Lost)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), "DB: Failed to update bid statuses");
                RestError::TemporarilyUnavailable
            })?;
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to commit tender closure");
            RestError::TemporarilyUnavailable
        })
    }

    #[instrument(
        target = "metrics",
        name = "db_cancel_tender",
        fields(category = "db_queries", result = "success", name = "cancel_tender"),
        skip_all
    )]
    async fn cancel_tender(&self, tender: &entities::Tender) -> Result<(), RestError> {
        let mut tx = self.begin().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to open transaction");
            RestError::TemporarilyUnavailable
        })?;
        sqlx::query("UPDATE tender SET status = $1 WHERE id = $2")
            .bind(TenderStatus::Cancelled)
            .bind(tender.id as i64)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), "DB: Failed to cancel tender");
                RestError::TemporarilyUnavailable
            })?;
        sqlx::query("UPDATE bid SET status = $2 WHERE tender_id = $1")
            .bind(tender.id as i64)
            .bind(BidStatus::Lost)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(error = e.to_string(), "DB: Failed to update bid statuses");
                RestError::TemporarilyUnavailable
            })?;
        tx.commit().await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to commit cancellation");
            RestError::TemporarilyUnavailable
        })
    }

    #[instrument(
        target = "metrics",
        name = "db_get_tenders",
        fields(category = "db_queries", result = "success", name = "get_tenders"),
        skip_all
    )]
    async fn get_tenders(&self) -> anyhow::Result<Vec<Tender>> {
        sqlx::query_as::<_, Tender>("SELECT * FROM tender ORDER BY id ASC")
            .fetch_all(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                anyhow!("DB: Failed to load tenders: {e}")
            })
    }

    #[instrument(
        target = "metrics",
        name = "db_get_bids",
        fields(category = "db_queries", result = "success", name = "get_bids"),
        skip_all
    )]
    async fn get_bids(&self) -> anyhow::Result<Vec<Bid>> {
        sqlx::query_as::<_, Bid>("SELECT * FROM bid ORDER BY tender_id ASC, id ASC")
            .fetch_all(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                anyhow!("DB: Failed to load bids: {e}")
            })
    }
}
