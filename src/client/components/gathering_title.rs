use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn GatheringTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::MyPage {},
            div { class: "flex items-center gap-2",
                p { class: "text-xl",
                    "Gathering"
                }
            }
        }
    )
}
