use super::*;

/// Expect the registration 400 response to document both error bodies
#[tokio::test]
async fn register_documents_both_error_bodies() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, doc) = send(
        test.into_router(),
        Method::GET,
        "/api/docs/openapi.json",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let schema = &doc["paths"]["/events/{id}/register"]["post"]["responses"]["400"]["content"]
        ["application/json"]["schema"];
    assert_eq!(schema["$ref"], "#/components/schemas/RegisterErrorDto");

    let variants: Vec<&str> = doc["components"]["schemas"]["RegisterErrorDto"]["oneOf"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|variant| variant["$ref"].as_str())
        .collect();
    assert_eq!(
        variants,
        vec![
            "#/components/schemas/ExternalSignupErrorDto",
            "#/components/schemas/ErrorDto"
        ]
    );

    Ok(())
}
