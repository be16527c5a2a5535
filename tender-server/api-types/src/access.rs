use {
    crate::{
        Address,
        TenderId,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct AddAdmin {
    /// The address to grant admin rights to.
    #[schema(example = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC")]
    pub admin: Address,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct AdminStatus {
    /// The address that was queried.
    #[schema(example = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC")]
    pub admin:    Address,
    /// Whether the address currently holds admin rights.
    pub is_admin: bool,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct VendorStatus {
    /// The address that was queried.
    #[schema(example = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8")]
    pub vendor:      Address,
    /// Whether the address is currently a verified vendor.
    pub is_verified: bool,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct ApproveVendor {
    /// The address to add to the tender's allow-list.
    #[schema(example = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8")]
    pub vendor: Address,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct BulkApproveVendors {
    /// The addresses to add to the tender's allow-list.
    #[schema(example = json!(["0x70997970C51812dc3A010C7d01b50e0d17dc79C8"]))]
    pub vendors: Vec<Address>,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct ApprovedVendors {
    /// The id of the private tender.
    #[schema(example = 17)]
    pub tender_id: TenderId,
    /// The tender's current allow-list.
    #[schema(example = json!(["0x70997970C51812dc3A010C7d01b50e0d17dc79C8"]))]
    pub vendors:   Vec<Address>,
}
