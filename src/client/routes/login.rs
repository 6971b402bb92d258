use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    auth::AuthorizationUrl,
    client::components::{KakaoLogin, Page},
};
#[cfg(feature = "web")]
use crate::{auth::LoginService, client::platform::WebPlatform};

#[component]
pub fn Login() -> Element {
    #[allow(unused_mut)]
    let mut authorization_url = use_signal(|| None::<AuthorizationUrl>);

    // The button is only rendered, and so only bound, once the URL has loaded
    #[cfg(feature = "web")]
    use_future(move || async move {
        let Some(web) = WebPlatform::load() else {
            return;
        };

        let url = LoginService::new(&web.api, &web.browser).init().await;

        authorization_url.set(url);
    });

    rsx!(
        Title { "Login | Gathering" }
        Meta {
            name: "description",
            content: "Sign in to Gathering with your Kakao account."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl",
                    "Gathering"
                }
                if let Some(url) = authorization_url() {
                    KakaoLogin { url }
                } else {
                    div {
                        class: "skeleton h-12 w-60"
                    }
                }
            }
        }
    )
}
