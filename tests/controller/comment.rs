use huddle::{
    model::comment::CreateCommentDto,
    server::controller::comment::{create_comment, list_comments},
};

use super::*;

/// Expect 201 with the trimmed comment and its author
#[tokio::test]
async fn create_comment_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .build()
        .await?;
    let event = test.event().insert_event(1, None).await?;
    let dto = CreateCommentDto {
        content: Some("  I'll bring snacks ".to_string()),
    };

    let resp = create_comment(
        caller("bob@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
        Ok(Json(dto)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["comment"]["content"], "I'll bring snacks");
    assert_eq!(body["comment"]["eventId"], event.id);
    assert_eq!(body["comment"]["author"]["email"], "bob@example.com");

    Ok(())
}

/// Expect 400 for blank content
#[tokio::test]
async fn create_comment_rejects_blank() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .build()
        .await?;
    let event = test.event().insert_event(1, None).await?;
    let dto = CreateCommentDto {
        content: Some("  ".to_string()),
    };

    let resp = create_comment(
        caller("alice@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
        Ok(Json(dto)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "Comment content is required");

    Ok(())
}

/// Expect 404 when listing comments of an unknown event
#[tokio::test]
async fn list_comments_missing_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;

    let resp = list_comments(
        caller("alice@example.com"),
        State(test.into_app_state()),
        Ok(Path(5)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect an empty list for an event without comments
#[tokio::test]
async fn list_comments_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .build()
        .await?;
    let event = test.event().insert_event(1, None).await?;

    let resp = list_comments(
        caller("alice@example.com"),
        State(test.into_app_state()),
        Ok(Path(event.id)),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["comments"], serde_json::json!([]));

    Ok(())
}
