use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect 400 with an error body for ids that are not numbers
#[tokio::test]
async fn non_numeric_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;
    let authorization = bearer_for("alice@example.com")?;

    let (event_status, event_body) = send(
        test.into_router(),
        Method::GET,
        "/events/abc",
        Some(&authorization),
        None,
    )
    .await;
    let (comment_status, _) = send(
        test.into_router(),
        Method::GET,
        "/comments/abc",
        Some(&authorization),
        None,
    )
    .await;

    assert_eq!(event_status, StatusCode::BAD_REQUEST);
    assert_eq!(event_body["error"], "Invalid id");
    assert_eq!(comment_status, StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 and nothing stored for a body that is not JSON
#[tokio::test]
async fn malformed_json_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;
    let authorization = bearer_for("alice@example.com")?;

    let (status, body) = send(
        test.into_router(),
        Method::POST,
        "/events",
        Some(&authorization),
        Some("{\"title\": "),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(entity::prelude::Event::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect the not-a-date rejection end to end
#[tokio::test]
async fn invalid_start_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;
    let authorization = bearer_for("alice@example.com")?;

    let (status, body) = send(
        test.into_router(),
        Method::POST,
        "/events",
        Some(&authorization),
        Some(r#"{"title": "Offsite", "startsAt": "not-a-date"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "startsAt must be a valid date");
    assert_eq!(entity::prelude::Event::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect `null` to clear an optional field while absent fields are kept
#[tokio::test]
async fn null_clears_optional_field() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .build()
        .await?;
    let event = test.event().insert_event(1, Some(10)).await?;
    let authorization = bearer_for("alice@example.com")?;

    let (status, body) = send(
        test.into_router(),
        Method::PUT,
        &format!("/events/{}", event.id),
        Some(&authorization),
        Some(r#"{"capacity": null, "location": "Rooftop"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["event"]["capacity"].is_null());
    assert_eq!(body["event"]["location"], "Rooftop");
    assert_eq!(body["event"]["title"], "Team Lunch");

    Ok(())
}

/// Expect 400 when a required field is set to `null`
#[tokio::test]
async fn null_required_field_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .build()
        .await?;
    let event = test.event().insert_event(1, None).await?;
    let authorization = bearer_for("alice@example.com")?;

    let (status, body) = send(
        test.into_router(),
        Method::PUT,
        &format!("/events/{}", event.id),
        Some(&authorization),
        Some(r#"{"title": null}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "title cannot be null");

    Ok(())
}

/// Expect 400 for an includeCancelled value that is not a boolean
#[tokio::test]
async fn malformed_query_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;
    let authorization = bearer_for("alice@example.com")?;

    let (status, _) = send(
        test.into_router(),
        Method::GET,
        "/events?includeCancelled=maybe",
        Some(&authorization),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}
