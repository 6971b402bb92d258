use dioxus::prelude::*;

use crate::auth::AuthorizationUrl;
#[cfg(feature = "web")]
use crate::auth::WebBrowser;

/// Kakao login button, only rendered once the authorization URL is known.
#[component]
pub fn KakaoLogin(url: AuthorizationUrl) -> Element {
    rsx!(
        button {
            class: "btn kakao-btn w-60 border-none bg-[#FEE500] text-black",
            onclick: move |_| {
                #[cfg(feature = "web")]
                url.open(&WebBrowser);
            },
            "Login with Kakao"
        }
    )
}
