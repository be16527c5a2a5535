use {
    crate::{
        api::{
            Auth,
            RestError,
        },
        state::StoreNew,
    },
    axum::{
        body::Bytes,
        extract::{
            Path,
            State,
        },
        http::header,
        response::IntoResponse,
        Json,
    },
    std::sync::Arc,
    tender_api_types::{
        DocumentResponse,
        ErrorBodyResponse,
    },
};

/// Store a tender document bundle.
///
/// Returns the content hash to reference from a tender's `document_hash`.
#[utoipa::path(post, path = "/v1/documents",
security(
("bearerAuth" = []),
), request_body = Vec<u8>, responses(
(status = 200, description = "The stored document's content hash", body = DocumentResponse),
(status = 400, response = ErrorBodyResponse),
),)]
pub async fn post_document(
    auth: Auth,
    State(store): State<Arc<StoreNew>>,
    body: Bytes,
) -> Result<Json<DocumentResponse>, RestError> {
    auth.require_identity()?;
    if body.is_empty() {
        return Err(RestError::BadParameters(
            "document must not be empty".to_string(),
        ));
    }
    let hash = store.document_store.put(body.to_vec()).await?;
    Ok(Json(DocumentResponse { hash }))
}

/// Retrieve a document bundle by its content hash.
///
/// The content is verified against the hash before it is returned.
#[utoipa::path(get, path = "/v1/documents/{hash}",
    responses(
    (status = 200, description = "The document content", body = Vec<u8>),
    (status = 404, description = "Document was not found", body = ErrorBodyResponse),
),  params(("hash" = String, description = "Content hash to fetch")),
)]
pub async fn get_document(
    State(store): State<Arc<StoreNew>>,
    Path(hash): Path<String>,
) -> Result<impl IntoResponse, RestError> {
    let bytes = store.document_store.get(&hash).await?;
    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        bytes,
    ))
}
