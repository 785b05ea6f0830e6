use super::*;

/// Expect 401 without an Authorization header
#[tokio::test]
async fn missing_token_is_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;

    let (status, body) = send(test.into_router(), Method::GET, "/events", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    Ok(())
}

/// Expect 401 for expired tokens and tokens signed with another key
#[tokio::test]
async fn invalid_tokens_are_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;
    let expired = factory::bearer(&factory::expired_identity_token("alice@example.com")?);
    let foreign = factory::bearer(&factory::foreign_identity_token("alice@example.com")?);

    let (expired_status, _) =
        send(test.into_router(), Method::GET, "/me", Some(&expired), None).await;
    let (foreign_status, _) =
        send(test.into_router(), Method::GET, "/me", Some(&foreign), None).await;
    let (garbage_status, _) = send(
        test.into_router(),
        Method::GET,
        "/me",
        Some("Bearer not-a-jwt"),
        None,
    )
    .await;

    assert_eq!(expired_status, StatusCode::UNAUTHORIZED);
    assert_eq!(foreign_status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage_status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 403 naming the allowed domain for an outside email
#[tokio::test]
async fn outside_domain_is_forbidden() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;
    let authorization = bearer_for("mallory@elsewhere.org")?;

    let (status, body) = send(
        test.into_router(),
        Method::GET,
        "/me",
        Some(&authorization),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        format!("Access restricted to @{} email addresses", TEST_EMAIL_DOMAIN)
    );

    Ok(())
}

/// Expect a valid token to reach the handler
#[tokio::test]
async fn valid_token_reaches_handler() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;
    let authorization = bearer_for("alice@example.com")?;

    let (status, body) = send(
        test.into_router(),
        Method::GET,
        "/me",
        Some(&authorization),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "alice@example.com");

    Ok(())
}

/// Expect the liveness check to need no token
#[tokio::test]
async fn health_is_public() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = send(test.into_router(), Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    Ok(())
}
