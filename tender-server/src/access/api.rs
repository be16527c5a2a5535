use {
    super::service::{
        add_admin::AddAdminInput,
        approve_vendor::ApproveVendorInput,
        bulk_approve_vendors::BulkApproveVendorsInput,
        get_approved_vendors::GetApprovedVendorsInput,
        remove_admin::RemoveAdminInput,
        revoke_approval::RevokeApprovalInput,
        revoke_vendor::RevokeVendorInput,
        verify_vendor::VerifyVendorInput,
    },
    crate::{
        api::{
            Auth,
            RestError,
        },
        kernel::entities::{
            Address,
            TenderId,
        },
        state::StoreNew,
    },
    axum::{
        extract::{
            Path,
            State,
        },
        Json,
    },
    std::sync::Arc,
    tender_api_types::{
        access::{
            AddAdmin,
            AdminStatus,
            ApproveVendor,
            ApprovedVendors,
            BulkApproveVendors,
            VendorStatus,
        },
        ErrorBodyResponse,
    },
};

/// Grant admin rights to an address.
///
/// Only an existing admin can add admins.
#[utoipa::path(post, path = "/v1/admins",
security(
("bearerAuth" = []),
), request_body = AddAdmin, responses(
(status = 200, description = "Admin was added successfully"),
(status = 400, response = ErrorBodyResponse),
),)]
pub async fn post_admin(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Json(params): Json<AddAdmin>,
) -> Result<Json<()>, RestError> {
    store
        .access_service
        .add_admin(AddAdminInput {
            caller: auth.require_identity()?,
            admin:  params.admin,
        })
        .await?;
    Ok(Json(()))
}

/// Revoke an address's admin rights.
///
/// Only an admin can remove admins, and the final admin cannot be removed.
#[utoipa::path(delete, path = "/v1/admins/{admin}",
security(
("bearerAuth" = []),
), responses(
(status = 200, description = "Admin was removed successfully"),
(status = 400, response = ErrorBodyResponse),
),  params(("admin" = String, description = "Address to remove as admin")),
)]
pub async fn delete_admin(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Path(admin): Path<Address>,
) -> Result<Json<()>, RestError> {
    store
        .access_service
        .remove_admin(RemoveAdminInput {
            caller: auth.require_identity()?,
            admin,
        })
        .await?;
    Ok(Json(()))
}

/// Check whether an address holds admin rights.
#[utoipa::path(get, path = "/v1/admins/{admin}",
    responses(
    (status = 200, body = AdminStatus),
),  params(("admin" = String, description = "Address to query for")),
)]
pub async fn get_admin_status(
    State(store): State<Arc<StoreNew>>,
    Path(admin): Path<Address>,
) -> Result<Json<AdminStatus>, RestError> {
    let is_admin = store.access_service.is_admin(&admin).await;
    Ok(Json(AdminStatus { admin, is_admin }))
}

/// Mark an address as a verified vendor.
///
/// Only an admin can verify vendors.
#[utoipa::path(post, path = "/v1/vendors/{vendor}",
security(
("bearerAuth" = []),
), responses(
(status = 200, description = "Vendor was verified successfully"),
(status = 400, response = ErrorBodyResponse),
),  params(("vendor" = String, description = "Address to verify")),
)]
pub async fn post_verify_vendor(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Path(vendor): Path<Address>,
) -> Result<Json<()>, RestError> {
    store
        .access_service
        .verify_vendor(VerifyVendorInput {
            caller: auth.require_identity()?,
            vendor,
        })
        .await?;
    Ok(Json(()))
}

/// Revoke an address's vendor verification.
///
/// Only an admin can revoke vendors. Bids the vendor already submitted
/// stay valid.
#[utoipa::path(delete, path = "/v1/vendors/{vendor}",
security(
("bearerAuth" = []),
), responses(
(status = 200, description = "Vendor verification was revoked successfully"),
(status = 400, response = ErrorBodyResponse),
),  params(("vendor" = String, description = "Address to revoke")),
)]
pub async fn delete_verified_vendor(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Path(vendor): Path<Address>,
) -> Result<Json<()>, RestError> {
    store
        .access_service
        .revoke_vendor(RevokeVendorInput {
            caller: auth.require_identity()?,
            vendor,
        })
        .await?;
    Ok(Json(()))
}

/// Check whether an address is a verified vendor.
#[utoipa::path(get, path = "/v1/vendors/{vendor}",
    responses(
    (status = 200, body = VendorStatus),
),  params(("vendor" = String, description = "Address to query for")),
)]
pub async fn get_vendor_status(
    State(store): State<Arc<StoreNew>>,
    Path(vendor): Path<Address>,
) -> Result<Json<VendorStatus>, RestError> {
    let is_verified = store.access_service.is_verified_vendor(&vendor).await;
    Ok(Json(VendorStatus {
        vendor,
        is_verified,
    }))
}

/// Returns a private tender's allow-list.
///
/// Visible to the tender's owner and admins.
#[utoipa::path(get, path = "/v1/tenders/{tender_id}/vendors",
security(
("bearerAuth" = []),
), responses(
(status = 200, body = ApprovedVendors),
(status = 404, description = "Tender was not found", body = ErrorBodyResponse),
),  params(("tender_id" = u64, description = "Tender id to query for")),
)]
pub async fn get_approved_vendors(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Path(tender_id): Path<TenderId>,
) -> Result<Json<ApprovedVendors>, RestError> {
    let vendors = store
        .access_service
        .get_approved_vendors(GetApprovedVendorsInput {
            caller: auth.require_identity()?,
            tender_id,
        })
        .await?;
    Ok(Json(ApprovedVendors { tender_id, vendors }))
}

/// Approve a vendor for a private tender.
///
/// Only the tender's owner or an admin can approve, and only while the
/// tender is active.
#[utoipa::path(post, path = "/v1/tenders/{tender_id}/vendors",
security(
("bearerAuth" = []),
), request_body = ApproveVendor, responses(
(status = 200, description = "Vendor was approved successfully"),
(status = 400, response = ErrorBodyResponse),
(status = 404, description = "Tender was not found", body = ErrorBodyResponse),
),  params(("tender_id" = u64, description = "Tender id to approve for")),
)]
pub async fn post_approve_vendor(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Path(tender_id): Path<TenderId>,
    Json(params): Json<ApproveVendor>,
) -> Result<Json<()>, RestError> {
    store
        .access_service
        .approve_vendor(ApproveVendorInput {
            caller: auth.require_identity()?,
            tender_id,
            vendor: params.vendor,
        })
        .await?;
    Ok(Json(()))
}

/// Approve multiple vendors for a private tender in one call.
///
/// Vendors already on the allow-list are skipped. Returns the vendors
/// that were actually added.
#[utoipa::path(post, path = "/v1/tenders/{tender_id}/vendors/bulk",
security(
("bearerAuth" = []),
), request_body = BulkApproveVendors, responses(
(status = 200, description = "The vendors that were added", body = ApprovedVendors),
(status = 400, response = ErrorBodyResponse),
(status = 404, description = "Tender was not found", body = ErrorBodyResponse),
),  params(("tender_id" = u64, description = "Tender id to approve for")),
)]
pub async fn post_bulk_approve_vendors(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Path(tender_id): Path<TenderId>,
    Json(params): Json<BulkApproveVendors>,
) -> Result<Json<ApprovedVendors>, RestError> {
    let added = store
        .access_service
        .bulk_approve_vendors(BulkApproveVendorsInput {
            caller:  auth.require_identity()?,
            tender_id,
            vendors: params.vendors,
        })
        .await?;
    Ok(Json(ApprovedVendors {
        tender_id,
        vendors: added,
    }))
}

/// Remove a vendor from a private tender's allow-list.
///
/// Bids the vendor already submitted stay valid and can still win.
#[utoipa::path(delete, path = "/v1/tenders/{tender_id}/vendors/{vendor}",
security(
("bearerAuth" = []),
), responses(
(status = 200, description = "Vendor approval was revoked successfully"),
(status = 400, response = ErrorBodyResponse),
(status = 404, description = "Tender was not found", body = ErrorBodyResponse),
),  params(
        ("tender_id" = u64, description = "Tender id to revoke for"),
        ("vendor" = String, description = "Address to revoke")
    ),
)]
pub async fn delete_approved_vendor(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    Path((tender_id, vendor)): Path<(TenderId, Address)>,
) -> Result<Json<()>, RestError> {
    store
        .access_service
        .revoke_approval(RevokeApprovalInput {
            caller: auth.require_identity()?,
            tender_id,
            vendor,
        })
        .await?;
    Ok(Json(()))
}
