use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-2",
            p { "Page not found: /{path}" }
            Link {
                to: Route::Login {},
                "Go to login"
            }
        }
    )
}
