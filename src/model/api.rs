use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Generic acknowledgement body for endpoints with nothing else to return.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct OkDto {
    pub message: String,
}
