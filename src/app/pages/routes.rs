use crate::app::layouts::SiteHeader;
use crate::app::pages::home::Home;
use dioxus::document;
use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("FinSight navigation app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Use asset!() so the bundled CSS is fingerprinted and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        }
        div { class: "c-layout",
            // Auth is an external collaborator; log the intent until it is
            // wired up.
            SiteHeader {
                on_login_request: move |_| tracing::info!(action = "login", "auth entry requested"),
                on_signup_request: move |_| tracing::info!(action = "signup", "auth entry requested"),
            }
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}
