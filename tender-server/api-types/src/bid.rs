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
pub enum BidStatus {
    /// The bid is in the running; its tender is still active.
    Pending,
    /// The bid was selected as the winner at closure.
    Won,
    /// The bid was not selected, or its tender was cancelled.
    Lost,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug, PartialEq)]
pub struct Bid {
    /// The id of the bid, unique within its tender. Ids start at 1.
    #[schema(example = 3)]
    pub id:              BidId,
    /// The id of the tender the bid was submitted to.
    #[schema(example = 17)]
    pub tender_id:       TenderId,
    /// The address that submitted the bid.
    #[schema(example = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8")]
    pub bidder:          Address,
    /// The bid amount, in base units.
    #[schema(example = 250_000)]
    pub amount:          Amount,
    /// The bid proposal text.
    #[schema(example = "Full resurfacing within 60 days")]
    pub proposal:        String,
    /// The outcome of the bid.
    pub status:          BidStatus,
    /// The moment the bid was submitted.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(example = "2026-08-02T10:15:00Z", value_type = String)]
    pub submission_time: OffsetDateTime,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct BidCreate {
    /// The bid amount, in base units. Must be at least the tender's minimum bid.
    #[schema(example = 250_000)]
    pub amount:   Amount,
    /// The bid proposal text.
    #[schema(example = "Full resurfacing within 60 days")]
    pub proposal: String,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct BidResult {
    /// The id assigned to the submitted bid.
    #[schema(example = 3)]
    pub id: BidId,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct Bids {
    pub items: Vec<Bid>,
    /// Total number of bids on the tender, ignoring pagination.
    #[schema(example = 5)]
    pub total: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, IntoParams)]
pub struct GetBidsQueryParams {
    /// Number of bids to skip, in ascending id order.
    #[serde(default)]
    #[param(example = 0)]
    pub offset: u64,
    /// Maximum number of bids to return. Capped by the server.
    #[param(example = 20)]
    pub limit:  Option<u64>,
}
