//! The admission rule deciding between going and waitlist.

use entity::sea_orm_active_enums::RsvpStatus;

/// Decide the status for a registration.
///
/// `going_count` is the number of other users currently going. Unlimited events admit
/// everyone, otherwise the caller goes while there is room and is waitlisted after.
pub fn admit(capacity: Option<i32>, going_count: u64) -> RsvpStatus {
    match capacity {
        None => RsvpStatus::Going,
        Some(capacity) if going_count < capacity.max(0) as u64 => RsvpStatus::Going,
        Some(_) => RsvpStatus::Waitlist,
    }
}
