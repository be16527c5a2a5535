use {
    super::{
        entities,
        service::{
            cancel_tender::CancelTenderInput,
            close_tender::CloseTenderInput,
            create_tender::CreateTenderInput,
            get_bid::GetBidInput,
            get_tender::GetTenderInput,
            get_tender_bids::GetTenderBidsInput,
            get_tenders::GetTendersInput,
            submit_bid::SubmitBidInput,
        },
    },
    crate::{
        api::{
            Auth,
            RestError,
        },
        kernel::entities::{
            BidId,
            TenderId,
        },
        state::StoreNew,
    },
    axum::{
        extract::{
            Path,
            Query,
            State,
        },
        Json,
    },
    std::sync::Arc,
    tender_api_types::{
        bid::{
            Bid,
            BidCreate,
            BidResult,
            Bids,
            GetBidsQueryParams,
        },
        tender::{
            CreateTender,
            GetTendersQueryParams,
            Tender,
            TenderAward,
            TenderStatus,
            Tenders,
        },
        ErrorBodyResponse,
    },
};

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

impl From<entities::Tender> for Tender {
    fn from(tender: entities::Tender) -> Self {
        Tender {
            id:             tender.id,
            title:          tender.title,
            description:    tender.description,
            deadline:       tender.deadline,
            min_bid:        tender.min_bid,
            owner:          tender.owner,
            status:         tender.status.into(),
            winning_bid_id: tender.winning_bid_id,
            created_at:     tender.created_at,
            document_hash:  tender.document_hash,
            is_private:     tender.is_private,
            bids_count:     tender.bids_count,
        }
    }
}

impl From<entities::BidStatus> for tender_api_types::bid::BidStatus {
    fn from(status: entities::BidStatus) -> Self {
        match status {
            entities::BidStatus::Pending => tender_api_types::bid::BidStatus::Pending,
            entities::BidStatus::Won => tender_api_types::bid::BidStatus::Won,
            entities::BidStatus::Lost => tender_api_types::bid::BidStatus::Lost,
        }
    }
}

impl From<entities::Bid> for Bid {
    fn from(bid: entities::Bid) -> Self {
        Bid {
            id:              bid.id,
            tender_id:       bid.tender_id,
            bidder:          bid.bidder,
            amount:          bid.amount,
            proposal:        bid.proposal,
            status:          bid.status.into(),
            submission_time: bid.submission_time,
        }
    }
}

impl From<entities::TenderAward> for TenderAward {
    fn from(award: entities::TenderAward) -> Self {
        TenderAward {
            tender_id:      award.tender_id,
            winning_bid_id: award.winning_bid_id,
            winner:         award.winner,
            winning_amount: award.winning_amount,
        }
    }
}

/// Create a new tender.
///
/// The authenticated caller becomes the tender's owner and is the only
/// identity that can later close or cancel it.
#[utoipa::path(post, path = "/v1/tenders",
security(
("bearerAuth" = []),
), request_body = CreateTender, responses(
(status = 200, description = "The created tender", body = Tender),
(status = 400, response = ErrorBodyResponse),
),)]
pub async fn post_tender(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Json(params): Json<CreateTender>,
) -> Result<Json<Tender>, RestError> {
    let tender = store
        .tender_service
        .create_tender(CreateTenderInput {
            caller:          auth.require_identity()?,
            title:           params.title,
            description:     params.description,
            deadline:        params.deadline,
            min_bid:         params.min_bid,
            document_hash:   params.document_hash,
            is_private:      params.is_private,
            allowed_bidders: params.allowed_bidders,
        })
        .await?;
    Ok(Json(tender.into()))
}

/// Returns a paginated list of tenders in ascending id order.
#[utoipa::path(get, path = "/v1/tenders",
    responses(
    (status = 200, description = "Paginated list of tenders for the specified query", body = Tenders),
    (status = 400, response = ErrorBodyResponse),
),  params(GetTendersQueryParams),
)]
pub async fn get_tenders(
    State(store): State<Arc<StoreNew>>,
    query: Query<GetTendersQueryParams>,
) -> Result<Json<Tenders>, RestError> {
    let (items, total) = store
        .tender_service
        .get_tenders(GetTendersInput {
            offset: query.offset,
            limit:  query.limit,
            status: query.status.map(Into::into),
        })
        .await;
    Ok(Json(Tenders {
        items: items.into_iter().map(Into::into).collect(),
        total,
    }))
}

/// Query a specific tender.
#[utoipa::path(get, path = "/v1/tenders/{tender_id}",
    responses(
    (status = 200, body = Tender),
    (status = 404, description = "Tender was not found", body = ErrorBodyResponse),
),
    params(("tender_id" = u64, description = "Tender id to query for")),
)]
pub async fn get_tender(
    State(store): State<Arc<StoreNew>>,
    Path(tender_id): Path<TenderId>,
) -> Result<Json<Tender>, RestError> {
    let tender = store
        .tender_service
        .get_tender(GetTenderInput { tender_id })
        .await?;
    Ok(Json(tender.into()))
}

/// Submit a bid on a tender.
///
/// Bids are accepted while the tender is active and strictly before its
/// deadline. For a private tender the caller must be on the allow-list.
#[utoipa::path(post, path = "/v1/tenders/{tender_id}/bids",
security(
("bearerAuth" = []),
), request_body = BidCreate, responses(
(status = 200, description = "Bid was placed successfully", body = BidResult),
(status = 400, response = ErrorBodyResponse),
(status = 404, description = "Tender was not found", body = ErrorBodyResponse),
),  params(("tender_id" = u64, description = "Tender id to bid on")),
)]
pub async fn post_bid(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Path(tender_id): Path<TenderId>,
    Json(params): Json<BidCreate>,
) -> Result<Json<BidResult>, RestError> {
    let bid = store
        .tender_service
        .submit_bid(SubmitBidInput {
            caller: auth.require_identity()?,
            tender_id,
            amount: params.amount,
            proposal: params.proposal,
        })
        .await?;
    Ok(Json(BidResult { id: bid.id }))
}

/// Returns a paginated list of a tender's bids in submission order.
///
/// For a private tender the list is visible only to the owner, admins and
/// allow-listed vendors.
#[utoipa::path(get, path = "/v1/tenders/{tender_id}/bids",
security(
("bearerAuth" = []),
), responses(
(status = 200, description = "Paginated list of bids for the specified query", body = Bids),
(status = 404, description = "Tender was not found", body = ErrorBodyResponse),
),  params(
        ("tender_id" = u64, description = "Tender id to query for"),
        GetBidsQueryParams
    ),
)]
pub async fn get_tender_bids(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Path(tender_id): Path<TenderId>,
    query: Query<GetBidsQueryParams>,
) -> Result<Json<Bids>, RestError> {
    let (items, total) = store
        .tender_service
        .get_tender_bids(GetTenderBidsInput {
            caller: auth.identity(),
            tender_id,
            offset: query.offset,
            limit: query.limit,
        })
        .await?;
    Ok(Json(Bids {
        items: items.into_iter().map(Into::into).collect(),
        total,
    }))
}

/// Query a specific bid.
#[utoipa::path(get, path = "/v1/tenders/{tender_id}/bids/{bid_id}",
security(
("bearerAuth" = []),
), responses(
(status = 200, body = Bid),
(status = 404, description = "Bid was not found", body = ErrorBodyResponse),
),  params(
        ("tender_id" = u64, description = "Tender id to query for"),
        ("bid_id" = u64, description = "Bid id to query for")
    ),
)]
pub async fn get_tender_bid(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Path((tender_id, bid_id)): Path<(TenderId, BidId)>,
) -> Result<Json<Bid>, RestError> {
    let bid = store
        .tender_service
        .get_bid(GetBidInput {
            caller: auth.identity(),
            tender_id,
            bid_id,
        })
        .await?;
    Ok(Json(bid.into()))
}

/// Close a tender and select the winning bid.
///
/// Only the tender's owner can close it. The winner is the lowest bid,
/// ties broken by earliest submission then lowest bid id; a tender without
/// bids closes with no winner.
#[utoipa::path(post, path = "/v1/tenders/{tender_id}/close",
security(
("bearerAuth" = []),
), responses(
(status = 200, description = "The closed tender's award", body = TenderAward),
(status = 400, response = ErrorBodyResponse),
(status = 404, description = "Tender was not found", body = ErrorBodyResponse),
),  params(("tender_id" = u64, description = "Tender id to close")),
)]
pub async fn post_close_tender(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Path(tender_id): Path<TenderId>,
) -> Result<Json<TenderAward>, RestError> {
    let award = store
        .tender_service
        .close_tender(CloseTenderInput {
            caller: auth.require_identity()?,
            tender_id,
        })
        .await?;
    Ok(Json(award.into()))
}

/// Cancel a tender without selecting a winner.
///
/// Only the tender's owner can cancel it.
#[utoipa::path(post, path = "/v1/tenders/{tender_id}/cancel",
security(
("bearerAuth" = []),
), responses(
(status = 200, description = "Tender was cancelled successfully"),
(status = 400, response = ErrorBodyResponse),
(status = 404, description = "Tender was not found", body = ErrorBodyResponse),
),  params(("tender_id" = u64, description = "Tender id to cancel")),
)]
pub async fn post_cancel_tender(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Path(tender_id): Path<TenderId>,
) -> Result<Json<()>, RestError> {
    store
        .tender_service
        .cancel_tender(CancelTenderInput {
            caller: auth.require_identity()?,
            tender_id,
        })
        .await?;
    Ok(Json(()))
}
