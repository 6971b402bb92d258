use dioxus::prelude::*;

/// Signed-in user's name, rendered into `#username`.
#[component]
pub fn Username(username: String) -> Element {
    rsx!(
        span {
            id: "username",
            class: "font-semibold",
            "{username}"
        }
    )
}
