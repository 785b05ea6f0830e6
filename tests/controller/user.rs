use huddle::server::controller::user::get_me;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect the identity subject and email, without provisioning a user
#[tokio::test]
async fn get_me_returns_identity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_event_tables().build().await?;

    let resp = get_me(caller("alice@example.com"))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["userId"], "user_alice@example.com");
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(entity::prelude::User::find().count(&test.db).await?, 0);

    Ok(())
}
