use gathering::{
    auth::{AuthApi, BearerToken},
    error::Error,
};
use gathering_test_utils::prelude::*;

#[tokio::test]
/// Expect the token to be sent as a bearer credential and the user returned
async fn sends_bearer_credential() {
    let mut test = HttpTestSetup::new().await;
    let mock = test
        .mock_user_info(
            TEST_TOKEN,
            200,
            serde_json::json!({ "username": TEST_USERNAME, "email": "alice@example.com" }),
        )
        .await;
    let token = BearerToken::from_raw(TEST_TOKEN).unwrap();

    let user = test.api.user_info(&token).await.unwrap();

    mock.assert_async().await;
    assert_eq!(user.username, "alice");
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
}

#[tokio::test]
/// Expect an expired token to be reported as an unauthorized status
async fn error_on_unauthorized() {
    let mut test = HttpTestSetup::new().await;
    let mock = test
        .mock_user_info(TEST_TOKEN, 401, serde_json::json!({ "error": "Token expired" }))
        .await;
    let token = BearerToken::from_raw(TEST_TOKEN).unwrap();

    let result = test.api.user_info(&token).await;

    mock.assert_async().await;
    assert!(matches!(result, Err(Error::StatusError { status: 401, .. })));
}

#[tokio::test]
/// Expect a success body without a username to be a parse error
async fn error_on_missing_username() {
    let mut test = HttpTestSetup::new().await;
    let mock = test
        .mock_user_info(TEST_TOKEN, 200, serde_json::json!({ "email": "alice@example.com" }))
        .await;
    let token = BearerToken::from_raw(TEST_TOKEN).unwrap();

    let result = test.api.user_info(&token).await;

    mock.assert_async().await;
    assert!(matches!(result, Err(Error::ParseError(_))));
}

#[tokio::test]
/// Expect an unreachable backend to be a request error
async fn error_when_backend_unreachable() {
    let test = HttpTestSetup::new().await;
    let api = gathering::auth::HttpAuthApi::new(
        test.config.clone().with_api_base_url("http://127.0.0.1:1"),
    );
    let token = BearerToken::from_raw(TEST_TOKEN).unwrap();

    let result = api.user_info(&token).await;

    assert!(matches!(result, Err(Error::RequestError(_))));
}
