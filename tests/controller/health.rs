use huddle::server::controller::health::{db_health, health};

use super::*;

/// Expect the static liveness body
#[tokio::test]
async fn health_returns_ok() -> Result<(), TestError> {
    let resp = health().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");

    Ok(())
}

/// Expect `{"ok": true}` against a live database
#[tokio::test]
async fn db_health_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = db_health(caller("alice@example.com"), State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["ok"], true);

    Ok(())
}
