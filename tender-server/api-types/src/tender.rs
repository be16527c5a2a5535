use {
    crate::{
        Address,
        Amount,
        BidId,
        TenderId,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    time::OffsetDateTime,
    utoipa::{
        IntoParams,
        ToResponse,
        ToSchema,
    },
};

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TenderStatus {
    Active,
    Closed,
    Cancelled,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug, PartialEq)]
pub struct Tender {
    /// The id of the tender.
    #[schema(example = 17)]
    pub id:             TenderId,
    /// The title of the tender.
    #[schema(example = "Road resurfacing, district 4")]
    pub title:          String,
    /// The description of the tender.
    #[schema(example = "Resurfacing of 4.2km of municipal roads")]
    pub description:    String,
    /// The moment bidding closes. Bids are accepted strictly before this time.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(example = "2026-09-30T12:00:00Z", value_type = String)]
    pub deadline:       OffsetDateTime,
    /// The minimum acceptable bid amount, in base units.
    #[schema(example = 250_000)]
    pub min_bid:        Amount,
    /// The address that created the tender.
    #[schema(example = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")]
    pub owner:          Address,
    /// The lifecycle status of the tender.
    pub status:         TenderStatus,
    /// The id of the winning bid. 0 means no winner has been selected.
    #[schema(example = 3)]
    pub winning_bid_id: BidId,
    /// The moment the tender was created.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(example = "2026-08-01T09:30:00Z", value_type = String)]
    pub created_at:     OffsetDateTime,
    /// Content hash of the tender document bundle in the document store.
    #[schema(example = "grHAsPfpr3rLkYdT0bcbyVvDLmvy-v_lTHHCGtbe5Mk")]
    pub document_hash:  String,
    /// Whether bidding is restricted to an allow-list of vendors.
    pub is_private:     bool,
    /// The number of bids submitted so far.
    #[schema(example = 5)]
    pub bids_count:     u64,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct CreateTender {
    /// The title of the tender.
    #[schema(example = "Road resurfacing, district 4")]
    pub title:           String,
    /// The description of the tender.
    #[schema(example = "Resurfacing of 4.2km of municipal roads")]
    pub description:     String,
    /// The moment bidding closes. Must be strictly in the future.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(example = "2026-09-30T12:00:00Z", value_type = String)]
    pub deadline:        OffsetDateTime,
    /// The minimum acceptable bid amount, in base units. Must be greater than 0.
    #[schema(example = 250_000)]
    pub min_bid:         Amount,
    /// Content hash of the tender document bundle in the document store.
    #[serde(default)]
    #[schema(example = "grHAsPfpr3rLkYdT0bcbyVvDLmvy-v_lTHHCGtbe5Mk")]
    pub document_hash:   String,
    /// Whether bidding is restricted to an allow-list of vendors.
    #[serde(default)]
    pub is_private:      bool,
    /// The initial allow-list. Required and non-empty for private tenders.
    #[serde(default)]
    #[schema(example = json!(["0x70997970C51812dc3A010C7d01b50e0d17dc79C8"]))]
    pub allowed_bidders: Vec<Address>,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct Tenders {
    pub items: Vec<Tender>,
    /// Total number of tenders matching the query, ignoring pagination.
    #[schema(example = 42)]
    pub total: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, IntoParams)]
pub struct GetTendersQueryParams {
    /// Number of tenders to skip, in ascending id order.
    #[serde(default)]
    #[param(example = 0)]
    pub offset: u64,
    /// Maximum number of tenders to return. Capped by the server.
    #[param(example = 20)]
    pub limit:  Option<u64>,
    /// Only return tenders with this status.
    pub status: Option<TenderStatus>,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct TenderAward {
    /// The id of the closed tender.
    #[schema(example = 17)]
    pub tender_id:      TenderId,
    /// The id of the winning bid. 0 when the tender closed without bids.
    #[schema(example = 3)]
    pub winning_bid_id: BidId,
    /// The address of the winning bidder, if any.
    #[schema(example = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8")]
    pub winner:         Option<Address>,
    /// The winning bid amount, if any.
    #[schema(example = 250_000)]
    pub winning_amount: Option<Amount>,
}
