use sea_orm::DatabaseConnection;

use crate::server::service::auth::IdentityVerifier;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub identity: IdentityVerifier,
}
