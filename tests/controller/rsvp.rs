use entity::sea_orm_active_enums::RsvpStatus;
use huddle::server::controller::rsvp::{cancel_registration, register};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect going until capacity is reached, then waitlist
#[tokio::test]
async fn register_admits_then_waitlists() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .build()
        .await?;
    let event = test.event().insert_event(1, Some(1)).await?;

    let first = register(
        caller("bob@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
    )
    .await
    .unwrap()
    .into_response();
    let second = register(
        caller("carol@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await["rsvp"]["status"], "going");
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(second).await["rsvp"]["status"], "waitlist");

    Ok(())
}

/// Expect 400 with the external URL and no RSVP for an external event
#[tokio::test]
async fn register_rejects_external_event() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .build()
        .await?;
    let event = test
        .event()
        .insert_external_event(1, "https://tickets.example.org/party")
        .await?;

    let resp = register(
        caller("bob@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "External signup only");
    assert_eq!(body["externalUrl"], "https://tickets.example.org/party");
    assert_eq!(entity::prelude::Rsvp::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect 400 for a cancelled event
#[tokio::test]
async fn register_rejects_cancelled_event() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .build()
        .await?;
    let event = test.event().insert_cancelled_event(1).await?;

    let resp = register(
        caller("bob@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "Event is cancelled");

    Ok(())
}

/// Expect the cancelled RSVP, and no promotion of the waitlisted user
#[tokio::test]
async fn cancel_registration_does_not_promote() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .with_user("bob@example.com")
        .build()
        .await?;
    let event = test.event().insert_event(1, Some(1)).await?;
    test.rsvp().insert_rsvp(1, event.id, RsvpStatus::Going).await?;
    test.rsvp()
        .insert_rsvp(2, event.id, RsvpStatus::Waitlist)
        .await?;

    let resp = cancel_registration(
        caller("alice@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["rsvp"]["status"], "cancelled");
    let waitlisted = entity::prelude::Rsvp::find_by_id((2, event.id))
        .one(&test.db)
        .await?;
    assert_eq!(waitlisted.map(|r| r.status), Some(RsvpStatus::Waitlist));

    Ok(())
}

/// Expect `{"rsvp": null}` when there is nothing to cancel
#[tokio::test]
async fn cancel_registration_without_rsvp() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .build()
        .await?;
    let event = test.event().insert_event(1, None).await?;

    let resp = cancel_registration(
        caller("newcomer@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_json(resp).await["rsvp"].is_null());
    assert_eq!(entity::prelude::User::find().count(&test.db).await?, 1);

    Ok(())
}
