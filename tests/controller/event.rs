use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{EventStatus, Office, RsvpStatus};
use huddle::{
    model::event::{CreateEventDto, EventListQuery, UpdateEventDto},
    server::controller::event::{
        cancel_event, create_event, get_event, list_events, update_event,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

fn create_dto() -> CreateEventDto {
    CreateEventDto {
        title: Some("Board game night".to_string()),
        starts_at: Some("2026-12-04T18:00:00Z".to_string()),
        capacity: Some(6),
        ..Default::default()
    }
}

/// Expect 201 with the stored event in the `event` envelope
#[tokio::test]
async fn create_event_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;

    let resp = create_event(
        caller("alice@example.com"),
        State(test.into_app_state()),
        Ok(Json(create_dto())),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["event"]["title"], "Board game night");
    assert_eq!(body["event"]["office"], "VIE");
    assert_eq!(body["event"]["status"], "active");
    assert_eq!(body["event"]["signupMode"], "internal");
    assert_eq!(body["event"]["capacity"], 6);

    Ok(())
}

/// Expect 400 and no stored event for a start time that is not a date
#[tokio::test]
async fn create_event_rejects_invalid_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;
    let dto = CreateEventDto {
        starts_at: Some("not-a-date".to_string()),
        ..create_dto()
    };

    let resp = create_event(
        caller("alice@example.com"),
        State(test.into_app_state()),
        Ok(Json(dto)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "startsAt must be a valid date");
    assert_eq!(entity::prelude::Event::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect 400 when title is missing
#[tokio::test]
async fn create_event_requires_title() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;
    let dto = CreateEventDto {
        title: None,
        ..create_dto()
    };

    let resp = create_event(
        caller("alice@example.com"),
        State(test.into_app_state()),
        Ok(Json(dto)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "title and startsAt are required");

    Ok(())
}

/// Expect 403 and an unchanged event when a non-creator updates
#[tokio::test]
async fn update_event_rejects_non_creator() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .with_user("bob@example.com")
        .build()
        .await?;
    let event = test.event().insert_event(1, Some(3)).await?;
    let dto = UpdateEventDto {
        title: Some(Some("Mine now".to_string())),
        ..Default::default()
    };

    let resp = update_event(
        caller("bob@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
        Ok(Json(dto)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let stored = entity::prelude::Event::find_by_id(event.id)
        .one(&test.db)
        .await?;
    assert_eq!(stored, Some(event));

    Ok(())
}

/// Expect the creator's partial update to leave other fields alone
#[tokio::test]
async fn update_event_applies_partial_update() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .build()
        .await?;
    let event = test.event().insert_event(1, Some(3)).await?;
    let dto = UpdateEventDto {
        office: Some(Some("ams".to_string())),
        ..Default::default()
    };

    let resp = update_event(
        caller("alice@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
        Ok(Json(dto)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["event"]["office"], "AMS");
    assert_eq!(body["event"]["title"], "Team Lunch");
    assert_eq!(body["event"]["capacity"], 3);

    Ok(())
}

/// Expect 404 when updating an unknown event
#[tokio::test]
async fn update_event_missing_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;

    let resp = update_event(
        caller("alice@example.com"),
        State(test.into_app_state()),
        Ok(Path(42)),
        Ok(Json(UpdateEventDto::default())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "Event not found");

    Ok(())
}

/// Expect 200 with a cancelled event for the creator, 403 for anyone else
#[tokio::test]
async fn cancel_event_is_creator_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .with_user("bob@example.com")
        .build()
        .await?;
    let event = test.event().insert_event(1, None).await?;

    let forbidden = cancel_event(
        caller("bob@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
    )
    .await
    .into_response();
    let stored = entity::prelude::Event::find_by_id(event.id)
        .one(&test.db)
        .await?;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
    assert_eq!(stored.map(|e| e.status), Some(EventStatus::Active));

    let resp = cancel_event(
        caller("alice@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["event"]["status"], "cancelled");

    Ok(())
}

/// Expect listings in start order with counts and hidden cancelled events
#[tokio::test]
async fn list_events_orders_and_filters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .with_user("bob@example.com")
        .build()
        .await?;
    let now = Utc::now().naive_utc();
    let later = test
        .event()
        .insert_event_at(1, Office::Sfo, now + Duration::days(3))
        .await?;
    let sooner = test
        .event()
        .insert_event_at(1, Office::Vie, now + Duration::days(1))
        .await?;
    test.event().insert_cancelled_event(1).await?;
    test.rsvp()
        .insert_rsvp(2, sooner.id, RsvpStatus::Going)
        .await?;

    let resp = list_events(
        caller("bob@example.com"),
        State(test.into_app_state()),
        Ok(Query(EventListQuery::default())),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["id"], sooner.id);
    assert_eq!(events[0]["goingCount"], 1);
    assert_eq!(events[0]["isRegistered"], true);
    assert_eq!(events[0]["rsvpStatus"], "going");
    assert_eq!(events[0]["attendees"][0]["email"], "bob@example.com");
    assert_eq!(events[1]["id"], later.id);
    assert_eq!(events[1]["isRegistered"], false);
    assert!(events[1]["rsvpStatus"].is_null());

    Ok(())
}

/// Expect 400 for an office that does not exist
#[tokio::test]
async fn list_events_rejects_unknown_office() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;
    let query = EventListQuery {
        office: Some("LHR".to_string()),
        include_cancelled: None,
    };

    let resp = list_events(
        caller("alice@example.com"),
        State(test.into_app_state()),
        Ok(Query(query)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the detail view to show going and waitlisted attendees
#[tokio::test]
async fn get_event_returns_breakdown() -> Result<(), TestError> {
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

    let resp = get_event(
        caller("bob@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["event"]["id"], event.id);
    assert_eq!(body["goingCount"], 1);
    assert_eq!(body["waitlistCount"], 1);
    assert_eq!(body["waitlist"][0]["email"], "bob@example.com");
    assert_eq!(body["isCreator"], false);
    assert_eq!(body["isRegistered"], true);
    assert_eq!(body["rsvpStatus"], "waitlist");

    Ok(())
}
