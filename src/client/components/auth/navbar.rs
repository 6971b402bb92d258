use dioxus::prelude::*;

use crate::client::{components::GatheringTitleButton, router::Route};
#[cfg(feature = "web")]
use crate::{auth::SessionService, client::platform::WebPlatform};

#[component]
pub fn AuthNavbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                GatheringTitleButton {}
            }
            div {
                class: "navbar-end",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        #[cfg(feature = "web")]
                        if let Some(web) = WebPlatform::load() {
                            SessionService::new(&web.api, &web.browser, &web.store, &web.config)
                                .logout();
                        }
                    },
                    "Logout"
                }
            }
        }

        Outlet::<Route> {}
    }
}
