use {
    serde::{
        Deserialize,
        Serialize,
    },
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

pub mod access;
pub mod bid;
pub mod profile;
pub mod tender;

pub type TenderId = u64;
pub type BidId = u64;
pub type Amount = u64;
pub type Address = String;

#[derive(ToResponse, ToSchema, Serialize, Deserialize)]
#[response(description = "An error occurred processing the request")]
pub struct ErrorBodyResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug)]
pub struct DocumentResponse {
    /// The content hash addressing the stored document bundle.
    #[schema(example = "grHAsPfpr3rLkYdT0bcbyVvDLmvy-v_lTHHCGtbe5Mk")]
    pub hash: String,
}
