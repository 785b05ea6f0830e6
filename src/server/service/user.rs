use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::Error,
    model::{auth::Identity, db::UserModel},
};

/// Service resolving verified identities to local users.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve the caller to a local user, creating the row on first use.
    ///
    /// Idempotent and safe under concurrent first requests, the unique email index decides
    /// which insert wins and every caller reads back the same row.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Existing or newly provisioned user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_or_create(&self, identity: &Identity) -> Result<UserModel, Error> {
        let user = UserRepository::new(self.db)
            .upsert_by_email(
                &identity.email,
                identity.name.clone(),
                identity.avatar_url.clone(),
            )
            .await?;

        tracing::debug!(user_id = user.id, email = %user.email, "Resolved local user");

        Ok(user)
    }

    /// Resolve the caller to a local user without provisioning one.
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - The caller has interacted before
    /// - `Ok(None)` - No local user exists for the caller's email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn find(&self, identity: &Identity) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db)
            .find_by_email(&identity.email)
            .await?)
    }
}
