use super::*;

/// Expect `/rsvp` to register and cancel exactly like `/register`
#[tokio::test]
async fn rsvp_alias_matches_register() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .build()
        .await?;
    let event = test.event().insert_event(1, Some(1)).await?;
    let bob = bearer_for("bob@example.com")?;
    let carol = bearer_for("carol@example.com")?;

    let (bob_status, bob_body) = send(
        test.into_router(),
        Method::POST,
        &format!("/events/{}/rsvp", event.id),
        Some(&bob),
        None,
    )
    .await;
    let (carol_status, carol_body) = send(
        test.into_router(),
        Method::POST,
        &format!("/events/{}/register", event.id),
        Some(&carol),
        None,
    )
    .await;

    assert_eq!(bob_status, StatusCode::OK);
    assert_eq!(bob_body["rsvp"]["status"], "going");
    assert_eq!(carol_status, StatusCode::OK);
    assert_eq!(carol_body["rsvp"]["status"], "waitlist");

    let (cancel_status, cancel_body) = send(
        test.into_router(),
        Method::DELETE,
        &format!("/events/{}/rsvp", event.id),
        Some(&bob),
        None,
    )
    .await;

    assert_eq!(cancel_status, StatusCode::OK);
    assert_eq!(cancel_body["rsvp"]["status"], "cancelled");

    Ok(())
}

/// Expect the external signup error with its URL through the alias
#[tokio::test]
async fn rsvp_alias_rejects_external_event() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .with_user("alice@example.com")
        .build()
        .await?;
    let event = test
        .event()
        .insert_external_event(1, "https://tickets.example.org/gala")
        .await?;
    let authorization = bearer_for("bob@example.com")?;

    let (status, body) = send(
        test.into_router(),
        Method::POST,
        &format!("/events/{}/rsvp", event.id),
        Some(&authorization),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "External signup only");
    assert_eq!(body["externalUrl"], "https://tickets.example.org/gala");

    Ok(())
}
