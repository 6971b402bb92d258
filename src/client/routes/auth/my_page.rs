use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::components::{auth::Username, Page},
    model::user::UserInfoDto,
};
#[cfg(feature = "web")]
use crate::{auth::SessionService, client::platform::WebPlatform};

#[component]
pub fn MyPage() -> Element {
    #[allow(unused_mut)]
    let mut user = use_signal(|| None::<UserInfoDto>);

    // Redirects to login on its own when there is no usable session
    #[cfg(feature = "web")]
    use_future(move || async move {
        let Some(web) = WebPlatform::load() else {
            return;
        };

        let session = SessionService::new(&web.api, &web.browser, &web.store, &web.config);

        if let Ok(user_info) = session.guard_my_page().await {
            user.set(Some(user_info));
        }
    });

    rsx!(
        Title { "My Page | Gathering" }
        Meta {
            name: "description",
            content: "Your Gathering account."
        }
        Page { class: "flex flex-col items-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body",
                    h2 { class: "card-title",
                        "My Page"
                    }
                    if let Some(user) = user() {
                        p { class: "text-lg",
                            "Welcome, "
                            Username { username: user.username.clone() }
                        }
                        if let Some(email) = &user.email {
                            p { class: "text-sm opacity-70",
                                "{email}"
                            }
                        }
                    } else {
                        div {
                            class: "skeleton h-6 w-40"
                        }
                    }
                }
            }
        }
    )
}
