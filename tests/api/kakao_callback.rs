use gathering::{
    auth::{callback::MISSING_REDIRECT_MESSAGE, AuthApi, CallbackService, MemorySessionStore},
    error::Error,
};
use gathering_test_utils::prelude::*;

#[tokio::test]
/// Expect the code to be sent as a query parameter and the redirect returned
async fn sends_code_and_returns_redirect() {
    let mut test = HttpTestSetup::new().await;
    let mock = test
        .mock_kakao_callback(
            TEST_CODE,
            200,
            serde_json::json!({ "redirectUrl": "/mypage.html" }),
        )
        .await;

    let result = test.api.kakao_callback(TEST_CODE).await;

    mock.assert_async().await;
    assert_eq!(result.unwrap().redirect_url.as_deref(), Some("/mypage.html"));
}

#[tokio::test]
/// Expect a code with reserved characters to be URL-encoded
async fn encodes_code() {
    let code = "a&b=c d";
    let mut test = HttpTestSetup::new().await;
    let mock = test
        .mock_kakao_callback(code, 200, serde_json::json!({ "redirectUrl": "/" }))
        .await;

    let result = test.api.kakao_callback(code).await;

    mock.assert_async().await;
    assert!(result.is_ok());
}

#[tokio::test]
/// Expect the backend's envelope to be unwrapped, including the issued token
async fn unwraps_envelope() {
    let mut test = HttpTestSetup::new().await;
    let mock = test
        .mock_kakao_callback(
            TEST_CODE,
            200,
            serde_json::json!({
                "statusCode": 200,
                "message": "ok",
                "data": {
                    "bearerToken": format!("Bearer {}", TEST_TOKEN),
                    "websocketUrl": "ws://localhost:8080/ws",
                },
            }),
        )
        .await;

    let dto = test.api.kakao_callback(TEST_CODE).await.unwrap();

    mock.assert_async().await;
    assert_eq!(dto.redirect_url, None);
    assert_eq!(dto.bearer_token, Some(format!("Bearer {}", TEST_TOKEN)));
    assert_eq!(dto.websocket_url.as_deref(), Some("ws://localhost:8080/ws"));
}

#[tokio::test]
/// Expect a rejected code to be an error
async fn error_on_bad_request() {
    let mut test = HttpTestSetup::new().await;
    let mock = test
        .mock_kakao_callback(
            TEST_CODE,
            400,
            serde_json::json!({ "statusCode": 400, "message": "Invalid code", "data": null }),
        )
        .await;

    let result = test.api.kakao_callback(TEST_CODE).await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(Error::StatusError { status: 400, ref message }) if message == "Invalid code"
    ));
}

#[tokio::test]
/// Expect an envelope with a null payload to decode as a response without a redirect
async fn null_envelope_data_has_no_redirect() {
    let mut test = HttpTestSetup::new().await;
    let mock = test
        .mock_kakao_callback(
            TEST_CODE,
            200,
            serde_json::json!({ "statusCode": 200, "message": "ok", "data": null }),
        )
        .await;

    let dto = test.api.kakao_callback(TEST_CODE).await.unwrap();

    mock.assert_async().await;
    assert_eq!(dto.redirect_url, None);
    assert_eq!(dto.bearer_token, None);
}

#[tokio::test]
/// Expect a null payload to reach the user as the missing redirect alert, without navigating
async fn null_envelope_data_alerts_missing_redirect() {
    let mut test = HttpTestSetup::new().await;
    let mock = test
        .mock_kakao_callback(
            TEST_CODE,
            200,
            serde_json::json!({ "statusCode": 200, "message": "ok", "data": null }),
        )
        .await;
    let browser = RecordingBrowser::default();
    let store = MemorySessionStore::new();

    let result = CallbackService::new(&test.api, &browser, &store)
        .handle_callback(TEST_CODE)
        .await;

    mock.assert_async().await;
    assert!(matches!(result, Err(Error::MissingRedirectUrl)));
    assert!(browser.navigations().is_empty());
    assert_eq!(browser.alerts(), vec![MISSING_REDIRECT_MESSAGE.to_string()]);
}
