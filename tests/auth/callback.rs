use gathering::{
    auth::{
        callback::{KAKAO_LOGIN_ERROR_MESSAGE, MISSING_REDIRECT_MESSAGE, TOKEN_MAX_AGE_SECS},
        SessionStore,
    },
    error::Error,
    model::api::LoginResponseDto,
};
use gathering_test_utils::prelude::*;

#[tokio::test]
/// Expect the redirect URL to be resolved against the page origin and navigated to
async fn navigates_to_redirect_on_origin() {
    let test = TestBuilder::new()
        .with_callback_redirect("/mypage.html")
        .build();

    let result = test.callback_service().handle_callback(TEST_CODE).await;

    let expected = format!("{}{}", TEST_ORIGIN, "/mypage.html");
    assert_eq!(result.unwrap(), expected);
    assert_eq!(test.browser.navigations(), vec![expected]);
    assert!(test.browser.alerts().is_empty());
}

#[tokio::test]
/// Expect the authorization code to be passed to the exchange as-is
async fn exchanges_given_code() {
    let test = TestBuilder::new()
        .with_callback_redirect("/mypage.html")
        .build();

    let _ = test.callback_service().handle_callback(TEST_CODE).await;

    assert_eq!(
        test.api.calls(),
        vec![ApiCall::KakaoCallback(TEST_CODE.to_string())]
    );
}

#[tokio::test]
/// Expect a response without a redirect URL to alert and not navigate
async fn missing_redirect_alerts_without_navigation() {
    let test = TestBuilder::new()
        .with_callback_response(MockResponse::Ok(LoginResponseDto::default()))
        .build();

    let result = test.callback_service().handle_callback(TEST_CODE).await;

    assert!(matches!(result, Err(Error::MissingRedirectUrl)));
    assert!(test.browser.navigations().is_empty());
    assert_eq!(
        test.browser.alerts(),
        vec![MISSING_REDIRECT_MESSAGE.to_string()]
    );
}

#[tokio::test]
/// Expect an empty redirect URL to be treated as missing
async fn empty_redirect_is_missing() {
    let test = TestBuilder::new().with_callback_redirect("").build();

    let result = test.callback_service().handle_callback(TEST_CODE).await;

    assert!(matches!(result, Err(Error::MissingRedirectUrl)));
    assert!(test.browser.navigations().is_empty());
}

#[tokio::test]
/// Expect a failed exchange to show the generic login error and not navigate
async fn failed_exchange_alerts_without_navigation() {
    let test = TestBuilder::new()
        .with_callback_response(MockResponse::Status(401))
        .build();

    let result = test.callback_service().handle_callback(TEST_CODE).await;

    assert!(matches!(result, Err(Error::StatusError { status: 401, .. })));
    assert!(test.browser.navigations().is_empty());
    assert_eq!(
        test.browser.alerts(),
        vec![KAKAO_LOGIN_ERROR_MESSAGE.to_string()]
    );
}

#[tokio::test]
/// Expect a bearer token in the response to be stored without its prefix
async fn stores_returned_bearer_token() {
    let test = TestBuilder::new()
        .with_callback_response(MockResponse::Ok(LoginResponseDto {
            redirect_url: Some("/mypage.html".to_string()),
            bearer_token: Some(format!("Bearer {}", TEST_TOKEN)),
            websocket_url: None,
        }))
        .build();

    let result = test.callback_service().handle_callback(TEST_CODE).await;

    assert!(result.is_ok());
    assert_eq!(test.store.get().as_deref(), Some(TEST_TOKEN));
    assert_eq!(TOKEN_MAX_AGE_SECS, 3600);
}

#[tokio::test]
/// Expect the session store to be left alone when no token is returned
async fn leaves_store_untouched_without_token() {
    let test = TestBuilder::new()
        .with_session_token(TEST_TOKEN)
        .with_callback_redirect("/mypage.html")
        .build();

    let _ = test.callback_service().handle_callback(TEST_CODE).await;

    assert_eq!(test.store.get().as_deref(), Some(TEST_TOKEN));
}

#[tokio::test]
/// Expect an unusable page origin to fail the flow with the generic error
async fn invalid_origin_alerts() {
    let test = TestBuilder::new()
        .with_origin("")
        .with_callback_redirect("/mypage.html")
        .build();

    let result = test.callback_service().handle_callback(TEST_CODE).await;

    assert!(matches!(result, Err(Error::UrlError(_))));
    assert!(test.browser.navigations().is_empty());
    assert_eq!(
        test.browser.alerts(),
        vec![KAKAO_LOGIN_ERROR_MESSAGE.to_string()]
    );
}
