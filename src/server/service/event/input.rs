//! Validation of event request bodies into [`EventFields`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{Office, SignupMode};

use crate::{
    model::event::{CreateEventDto, UpdateEventDto},
    server::{error::validation::ValidationError, model::event::EventFields},
};

pub const MAX_TITLE_CHARS: usize = 200;

/// Accepted `startsAt` layouts without an offset, read as UTC.
static NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a start time into a naive UTC timestamp.
pub fn parse_starts_at(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.naive_utc());
    }

    for format in NAIVE_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime);
        }
    }

    // Date only, midnight UTC
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(ValidationError::InvalidStartsAt)
}

/// Parse an office code, case-insensitive.
pub fn parse_office(value: &str) -> Option<Office> {
    match value.trim().to_uppercase().as_str() {
        "VIE" => Some(Office::Vie),
        "SFO" => Some(Office::Sfo),
        "YYZ" => Some(Office::Yyz),
        "AMS" => Some(Office::Ams),
        "SEA" => Some(Office::Sea),
        _ => None,
    }
}

pub fn parse_signup_mode(value: &str) -> Result<SignupMode, ValidationError> {
    match value.trim().to_lowercase().as_str() {
        "internal" => Ok(SignupMode::Internal),
        "external" => Ok(SignupMode::External),
        _ => Err(ValidationError::UnknownSignupMode(value.to_string())),
    }
}

fn validate_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong {
            max: MAX_TITLE_CHARS,
        });
    }

    Ok(title.to_string())
}

fn validate_capacity(capacity: Option<i32>) -> Result<Option<i32>, ValidationError> {
    match capacity {
        Some(capacity) if capacity < 1 => Err(ValidationError::InvalidCapacity),
        capacity => Ok(capacity),
    }
}

/// Trim optional text, treating blank as absent.
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn check_external_url(fields: &EventFields) -> Result<(), ValidationError> {
    if fields.signup_mode == SignupMode::External && fields.external_url.is_none() {
        return Err(ValidationError::ExternalUrlRequired);
    }

    Ok(())
}

/// Validate a create request.
///
/// Office falls back to the default site when absent or unrecognized, signup mode
/// defaults to internal and the event is public unless stated otherwise.
pub fn fields_from_create(dto: CreateEventDto) -> Result<EventFields, ValidationError> {
    let title = normalize(dto.title);
    let starts_at = normalize(dto.starts_at);
    let (Some(title), Some(starts_at)) = (title, starts_at) else {
        return Err(ValidationError::MissingRequired);
    };

    let signup_mode = match dto.signup_mode.as_deref() {
        Some(mode) => parse_signup_mode(mode)?,
        None => SignupMode::default(),
    };

    let fields = EventFields {
        title: validate_title(&title)?,
        description: normalize(dto.description),
        location: normalize(dto.location),
        office: dto
            .office
            .as_deref()
            .and_then(parse_office)
            .unwrap_or_default(),
        starts_at: parse_starts_at(&starts_at)?,
        capacity: validate_capacity(dto.capacity)?,
        signup_mode,
        external_url: normalize(dto.external_url),
        is_public: dto.is_public.unwrap_or(true),
    };

    check_external_url(&fields)?;

    Ok(fields)
}

/// Merge a partial update into the stored event.
///
/// Absent fields keep the stored value. An explicit `null` clears optional fields and is
/// rejected for required ones. The merged result must still satisfy the external URL rule.
pub fn merge_update(
    current: &entity::event::Model,
    dto: UpdateEventDto,
) -> Result<EventFields, ValidationError> {
    let mut fields = EventFields::from(current);

    match dto.title {
        Some(Some(title)) => fields.title = validate_title(&title)?,
        Some(None) => return Err(ValidationError::NullField("title")),
        None => {}
    }
    if let Some(description) = dto.description {
        fields.description = normalize(description);
    }
    if let Some(location) = dto.location {
        fields.location = normalize(location);
    }
    match dto.office {
        Some(Some(office)) => {
            fields.office =
                parse_office(&office).ok_or(ValidationError::UnknownOffice(office))?;
        }
        Some(None) => return Err(ValidationError::NullField("office")),
        None => {}
    }
    match dto.starts_at {
        Some(Some(starts_at)) => fields.starts_at = parse_starts_at(&starts_at)?,
        Some(None) => return Err(ValidationError::NullField("startsAt")),
        None => {}
    }
    if let Some(capacity) = dto.capacity {
        fields.capacity = validate_capacity(capacity)?;
    }
    match dto.signup_mode {
        Some(Some(mode)) => fields.signup_mode = parse_signup_mode(&mode)?,
        Some(None) => return Err(ValidationError::NullField("signupMode")),
        None => {}
    }
    if let Some(external_url) = dto.external_url {
        fields.external_url = normalize(external_url);
    }
    match dto.is_public {
        Some(Some(is_public)) => fields.is_public = is_public,
        Some(None) => return Err(ValidationError::NullField("isPublic")),
        None => {}
    }

    check_external_url(&fields)?;

    Ok(fields)
}
