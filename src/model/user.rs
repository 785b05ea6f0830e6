use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The authenticated caller as seen by the identity provider
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeDto {
    /// Identity provider subject, not the local user ID
    pub user_id: String,
    pub email: String,
}
