use gathering::{auth::AuthApi, error::Error};
use gathering_test_utils::prelude::*;

#[tokio::test]
/// Expect a plain text body to be returned as the authorization URL
async fn returns_plain_text_url() {
    let mut test = HttpTestSetup::new().await;
    let mock = test.mock_kakao_url(200, TEST_KAKAO_URL).await;

    let result = test.api.kakao_url().await;

    mock.assert_async().await;
    assert_eq!(result.unwrap(), TEST_KAKAO_URL);
}

#[tokio::test]
/// Expect an enveloped body to be unwrapped
async fn returns_enveloped_url() {
    let mut test = HttpTestSetup::new().await;
    let body = serde_json::json!({
        "statusCode": 200,
        "message": "ok",
        "data": TEST_KAKAO_URL,
    });
    let mock = test.mock_kakao_url(200, &body.to_string()).await;

    let result = test.api.kakao_url().await;

    mock.assert_async().await;
    assert_eq!(result.unwrap(), TEST_KAKAO_URL);
}

#[tokio::test]
/// Expect a server error to be reported with its status
async fn error_on_server_error() {
    let mut test = HttpTestSetup::new().await;
    let mock = test
        .mock_kakao_url(500, r#"{"error":"Internal server error"}"#)
        .await;

    let result = test.api.kakao_url().await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(Error::StatusError { status: 500, ref message }) if message == "Internal server error"
    ));
}
