use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};
#[cfg(feature = "web")]
use crate::{auth::CallbackService, client::platform::WebPlatform};

/// Target of Kakao's OAuth redirect, `/kakao/callback?code=...`
#[component]
pub fn KakaoCallback(code: String) -> Element {
    #[allow(unused_mut)]
    let mut failed = use_signal(|| false);

    #[cfg(feature = "web")]
    use_future(move || {
        let code = code.clone();

        async move {
            let Some(web) = WebPlatform::load() else {
                failed.set(true);
                return;
            };

            let result = CallbackService::new(&web.api, &web.browser, &web.store)
                .handle_callback(&code)
                .await;

            if result.is_err() {
                failed.set(true);
            }
        }
    });

    rsx!(
        Title { "Signing in | Gathering" }
        Page { class: "flex items-center justify-center",
            if failed() {
                div { class: "flex flex-col items-center gap-2",
                    p { "Kakao login failed." }
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary",
                        "Back to login"
                    }
                }
            } else {
                p { "Signing you in..." }
            }
        }
    )
}
