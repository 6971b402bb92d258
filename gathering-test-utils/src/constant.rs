pub static TEST_ORIGIN: &str = "http://localhost:8080";
pub static TEST_TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.test.signature";
pub static TEST_KAKAO_URL: &str =
    "https://kauth.kakao.com/oauth/authorize?client_id=client_id&redirect_uri=http://localhost:8080/kakao/callback&response_type=code";
pub static TEST_CODE: &str = "kakao_authorization_code";
pub static TEST_USERNAME: &str = "alice";
