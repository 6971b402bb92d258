use dioxus::prelude::*;

use crate::client::{components::GatheringTitleButton, router::Route};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                GatheringTitleButton {}
            }
        }

        Outlet::<Route> {}
    }
}
