use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Registration rejected because the event handles signups on another site
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSignupErrorDto {
    pub error: String,
    /// Where the caller should sign up instead
    pub external_url: String,
}

/// 400 body of a registration: the external signup rejection or a plain error such as
/// `Event is cancelled`
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RegisterErrorDto {
    ExternalSignup(ExternalSignupErrorDto),
    Error(ErrorDto),
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DbHealthDto {
    pub ok: bool,
}

/// Deserializes a field that distinguishes "absent" from an explicit `null`.
///
/// Combine with `#[serde(default)]`: an absent field stays `None`, `null` becomes
/// `Some(None)` and a value becomes `Some(Some(value))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
