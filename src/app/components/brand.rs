use dioxus::prelude::*;

/// Brand logo and wordmark. The image loads fire-and-forget; a failed load
/// leaves the wordmark standing and touches no navigation state.
#[component]
pub fn Brand(name: String) -> Element {
    const LOGO: Asset = asset!("/assets/logo.svg");

    rsx! {
        a {
            class: "c-brand",
            href: "/",
            aria_label: "{name} home",
            img {
                class: "c-brand__logo",
                src: LOGO,
                alt: "",
                width: "40",
                height: "40",
            }
            span { class: "c-brand__name", "{name}" }
        }
    }
}
