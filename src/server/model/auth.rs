use serde::Deserialize;

/// Claims read from an identity provider token.
///
/// Only the fields huddle uses are declared, anything else in the token is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct IdentityClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// A verified caller whose email belongs to the allowed domain.
///
/// Carries no local user ID, services resolve or provision the local user when they need one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Identity provider subject
    pub subject: String,
    /// Lowercased email address
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}
