use {
    crate::{
        kernel::entities::{
            Address,
            Amount,
            BidId,
            TenderId,
        },
        models,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        state::StoreNew,
        tender::entities::TenderStatus,
    },
    anyhow::Result,
    axum::{
        async_trait,
        extract::FromRequestParts,
        http::{
            request::Parts,
            StatusCode,
        },
        response::{
            IntoResponse,
            Response,
        },
        routing::{
            delete,
            get,
            post,
        },
        Json,
        Router,
    },
    axum_extra::{
        headers::{
            authorization::Bearer,
            Authorization,
        },
        TypedHeader,
    },
    axum_prometheus::PrometheusMetricLayer,
    clap::crate_version,
    std::sync::{
        atomic::Ordering,
        Arc,
    },
    tender_api_types::ErrorBodyResponse,
    tower_http::cors::CorsLayer,
    utoipa::OpenApi,
    utoipa_redoc::{
        Redoc,
        Servable,
    },
};

pub(crate) mod document;
pub(crate) mod profile;

async fn root() -> String {
    format!("Tender Server API {}", crate_version!())
}

pub async fn live() -> Response {
    (StatusCode::OK, "OK").into_response()
}

#[derive(Debug)]
pub enum RestError {
    /// The request contained invalid parameters.
    BadParameters(String),
    /// The operation is not valid for the tender's current status.
    InvalidState {
        tender_id: TenderId,
        status:    TenderStatus,
    },
    /// The tender's bidding deadline has passed.
    DeadlinePassed { tender_id: TenderId },
    /// The bid amount is below the tender's minimum bid.
    BidTooLow {
        tender_id: TenderId,
        amount:    Amount,
        min_bid:   Amount,
    },
    /// The request has no valid access token.
    Unauthorized,
    /// The caller is authenticated but not permitted to do this.
    Forbidden,
    /// Removing this admin would leave the admin set empty.
    LastAdmin,
    /// The tender was not found.
    TenderNotFound(TenderId),
    /// The bid was not found.
    BidNotFound { tender_id: TenderId, bid_id: BidId },
    /// The profile was not found.
    ProfileNotFound,
    /// The document was not found in the document store.
    DocumentNotFound(String),
    /// Internal error occurred during processing the request.
    TemporarilyUnavailable,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => {
                (StatusCode::BAD_REQUEST, format!("Bad parameters: {}", msg))
            }
            RestError::InvalidState { tender_id, status } => (
                StatusCode::BAD_REQUEST,
                format!("Tender {} is not active (status: {})", tender_id, status),
            ),
            RestError::DeadlinePassed { tender_id } => (
                StatusCode::BAD_REQUEST,
                format!("Bidding deadline for tender {} has passed", tender_id),
            ),
            RestError::BidTooLow {
                tender_id,
                amount,
                min_bid,
            } => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Bid {} is below the minimum bid {} for tender {}",
                    amount, min_bid, tender_id
                ),
            ),
            RestError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Invalid or missing access token".to_string(),
            ),
            RestError::Forbidden => (
                StatusCode::FORBIDDEN,
                "The caller is not allowed to perform this operation".to_string(),
            ),
            RestError::LastAdmin => (
                StatusCode::BAD_REQUEST,
                "The last remaining admin cannot be removed".to_string(),
            ),
            RestError::TenderNotFound(tender_id) => (
                StatusCode::NOT_FOUND,
                format!("Tender with id {} was not found", tender_id),
            ),
            RestError::BidNotFound { tender_id, bid_id } => (
                StatusCode::NOT_FOUND,
                format!("Bid {} was not found on tender {}", bid_id, tender_id),
            ),
            RestError::ProfileNotFound => (
                StatusCode::NOT_FOUND,
                "Profile with the specified identifier was not found".to_string(),
            ),
            RestError::DocumentNotFound(hash) => (
                StatusCode::NOT_FOUND,
                format!("Document {} was not found", hash),
            ),
            RestError::TemporarilyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "This service is temporarily unavailable".to_string(),
            ),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, msg) = self.to_status_and_message();
        (status, Json(ErrorBodyResponse { error: msg })).into_response()
    }
}

pub enum Auth {
    Authorized(models::AccessTokenToken, models::Profile),
    Unauthorized,
}

impl Auth {
    /// The caller's identity, or Unauthorized when no valid token was sent.
    pub fn require_identity(&self) -> Result<Address, RestError> {
        match self {
            Auth::Authorized(_, profile) => Ok(profile.address.clone()),
            Auth::Unauthorized => Err(RestError::Unauthorized),
        }
    }

    pub fn identity(&self) -> Option<Address> {
        match self {
            Auth::Authorized(_, profile) => Some(profile.address.clone()),
            Auth::Unauthorized => None,
        }
    }
}

#[async_trait]
impl FromRequestParts<Arc<StoreNew>> for Auth {
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<StoreNew>,
    ) -> Result<Self, Self::Rejection> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(header)) => {
                let profile = state.store.get_profile_by_token(header.token()).await?;
                Ok(Auth::Authorized(header.token().to_string(), profile))
            }
            Err(_) => Ok(Auth::Unauthorized),
        }
    }
}

pub async fn start_api(
    listen_addr: std::net::SocketAddr,
    store: Arc<StoreNew>,
    prometheus_layer: PrometheusMetricLayer<'static>,
) -> Result<()> {
    // Make sure functions included in the paths section have distinct names,
    // otherwise some api generators will fail.
    #[derive(OpenApi)]
    #[openapi(
    paths(
    crate::tender::api::post_tender,
    crate::tender::api::get_tenders,
    crate::tender::api::get_tender,
    crate::tender::api::post_bid,
    crate::tender::api::get_tender_bids,
    crate::tender::api::get_tender_bid,
    crate::tender::api::post_close_tender,
    crate::tender::api::post_cancel_tender,
    crate::access::api::post_admin,
    crate::access::api::delete_admin,
    crate::access::api::get_admin_status,
    crate::access::api::post_verify_vendor,
    crate::access::api::delete_verified_vendor,
    crate::access::api::get_vendor_status,
    crate::access::api::get_approved_vendors,
    crate::access::api::post_approve_vendor,
    crate::access::api::post_bulk_approve_vendors,
    crate::access::api::delete_approved_vendor,
    profile::post_profile,
    profile::get_profile,
    profile::post_profile_access_token,
    profile::delete_profile_access_token,
    document::post_document,
    document::get_document,
    ),
    components(
    schemas(
    tender_api_types::ErrorBodyResponse,
    tender_api_types::DocumentResponse,
    tender_api_types::tender::Tender,
    tender_api_types::tender::TenderStatus,
    tender_api_types::tender::CreateTender,
    tender_api_types::tender::Tenders,
    tender_api_types::tender::TenderAward,
    tender_api_types::bid::Bid,
    tender_api_types::bid::BidStatus,
    tender_api_types::bid::BidCreate,
    tender_api_types::bid::BidResult,
    tender_api_types::bid::Bids,
    tender_api_types::access::AddAdmin,
    tender_api_types::access::AdminStatus,
    tender_api_types::access::VendorStatus,
    tender_api_types::access::ApproveVendor,
    tender_api_types::access::BulkApproveVendors,
    tender_api_types::access::ApprovedVendors,
    tender_api_types::profile::CreateProfile,
    tender_api_types::profile::Profile,
    tender_api_types::profile::CreateAccessToken,
    tender_api_types::profile::AccessToken,
    ),
    responses(
    tender_api_types::ErrorBodyResponse,
    ),
    ),
    tags(
    (name = "Tender Server", description = "The tender server owns the tender and bid lifecycle \
    for procurement requests. It accepts bids until a tender's deadline, selects the winning bid \
    at closure, and enforces the admin/vendor access-control model.")
    )
    )]
    struct ApiDoc;

    let tender_routes = Router::new()
        .route(
            "/",
            post(crate::tender::api::post_tender).get(crate::tender::api::get_tenders),
        )
        .route("/:tender_id", get(crate::tender::api::get_tender))
        .route(
            "/:tender_id/bids",
            post(crate::tender::api::post_bid).get(crate::tender::api::get_tender_bids),
        )
        .route(
            "/:tender_id/bids/:bid_id",
            get(crate::tender::api::get_tender_bid),
        )
        .route("/:tender_id/close", post(crate::tender::api::post_close_tender))
        .route(
            "/:tender_id/cancel",
            post(crate::tender::api::post_cancel_tender),
        )
        .route(
            "/:tender_id/vendors",
            get(crate::access::api::get_approved_vendors)
                .post(crate::access::api::post_approve_vendor),
        )
        .route(
            "/:tender_id/vendors/bulk",
            post(crate::access::api::post_bulk_approve_vendors),
        )
        .route(
            "/:tender_id/vendors/:vendor",
            delete(crate::access::api::delete_approved_vendor),
        );
    let admin_routes = Router::new()
        .route("/", post(crate::access::api::post_admin))
        .route(
            "/:admin",
            get(crate::access::api::get_admin_status).delete(crate::access::api::delete_admin),
        );
    let vendor_routes = Router::new().route(
        "/:vendor",
        get(crate::access::api::get_vendor_status)
            .post(crate::access::api::post_verify_vendor)
            .delete(crate::access::api::delete_verified_vendor),
    );
    let profile_routes = Router::new()
        .route("/", post(profile::post_profile).get(profile::get_profile))
        .route(
            "/access_tokens",
            post(profile::post_profile_access_token)
                .delete(profile::delete_profile_access_token),
        );
    let document_routes = Router::new()
        .route("/", post(document::post_document))
        .route("/:hash", get(document::get_document));

    let v1_routes = Router::new().nest(
        "/v1",
        Router::new()
            .nest("/tenders", tender_routes)
            .nest("/admins", admin_routes)
            .nest("/vendors", vendor_routes)
            .nest("/profiles", profile_routes)
            .nest("/documents", document_routes),
    );

    let app: Router<()> = Router::new()
        .merge(Redoc::with_url("/docs", ApiDoc::openapi()))
        .merge(v1_routes)
        .route("/", get(root))
        .route("/live", get(live))
        .layer(CorsLayer::permissive())
        .layer(prometheus_layer)
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    tracing::info!("API server listening on {}", listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            while !SHOULD_EXIT.load(Ordering::Acquire) {
                tokio::time::sleep(EXIT_CHECK_INTERVAL).await;
            }
            tracing::info!("Shutting down RPC server...");
        })
        .await?;
    Ok(())
}
