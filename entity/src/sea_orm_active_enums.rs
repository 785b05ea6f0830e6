use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Office site code an event is tagged with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum Office {
    /// Vienna
    #[default]
    #[sea_orm(string_value = "VIE")]
    #[serde(rename = "VIE")]
    Vie,
    /// San Francisco
    #[sea_orm(string_value = "SFO")]
    #[serde(rename = "SFO")]
    Sfo,
    /// Toronto
    #[sea_orm(string_value = "YYZ")]
    #[serde(rename = "YYZ")]
    Yyz,
    /// Amsterdam
    #[sea_orm(string_value = "AMS")]
    #[serde(rename = "AMS")]
    Ams,
    /// Seattle
    #[sea_orm(string_value = "SEA")]
    #[serde(rename = "SEA")]
    Sea,
}

/// Whether registration goes through RSVPs or an external URL.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum SignupMode {
    #[default]
    #[sea_orm(string_value = "internal")]
    Internal,
    #[sea_orm(string_value = "external")]
    External,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    #[sea_orm(string_value = "active")]
    Active,
    /// Soft-cancelled by the creator, still readable.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    #[sea_orm(string_value = "going")]
    Going,
    #[sea_orm(string_value = "waitlist")]
    Waitlist,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}
