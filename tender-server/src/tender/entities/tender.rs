use {
    crate::kernel::entities::{
        Address,
        Amount,
        BidId,
        DocumentHash,
        TenderId,
    },
    std::sync::Arc,
    strum::Display,
    time::OffsetDateTime,
    tokio::sync::Mutex,
};

/// Serializes all mutations of a single tender. Cross-tender operations
/// never contend on it.
pub type TenderLock = Arc<Mutex<()>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TenderStatus {
    Active,
    Closed,
    Cancelled,
}

impl TenderStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, TenderStatus::Active)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tender {
    pub id:             TenderId,
    pub title:          String,
    pub description:    String,
    pub deadline:       OffsetDateTime,
    pub min_bid:        Amount,
    pub owner:          Address,
    pub status:         TenderStatus,
    /// 0 until the tender is closed with at least one bid.
    pub winning_bid_id: BidId,
    pub created_at:     OffsetDateTime,
    pub document_hash:  DocumentHash,
    pub is_private:     bool,
    pub bids_count:     u64,
}

/// Validated creation parameters. The repository assigns the id.
#[derive(Clone, Debug)]
pub struct TenderCreate {
    pub title:           String,
    pub description:     String,
    pub deadline:        OffsetDateTime,
    pub min_bid:         Amount,
    pub owner:           Address,
    pub document_hash:   DocumentHash,
    pub is_private:      bool,
    pub allowed_bidders: Vec<Address>,
    pub creation_time:   OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TenderAward {
    pub tender_id:      TenderId,
    pub winning_bid_id: BidId,
    pub winner:         Option<Address>,
    pub winning_amount: Option<Amount>,
}
