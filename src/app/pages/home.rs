use dioxus::prelude::*;

/// Landing page rendered under the header.
#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "c-home",
            h1 { class: "c-home__title", "Market insight, at a glance" }
            p { class: "c-home__lead",
                "Follow the sectors that move: banking, hydropower and beyond."
            }
        }
    }
}
