use crate::app::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;

/// Login / Sign Up pair shown inline on wide viewports. Both callbacks are
/// optional; activation with a callback unset is a silent no-op.
#[component]
pub fn AuthButtons(
    on_login_request: Option<EventHandler<()>>,
    on_signup_request: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "c-auth",
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| {
                    if let Some(handler) = &on_login_request {
                        handler.call(());
                    }
                },
                "Login"
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    if let Some(handler) = &on_signup_request {
                        handler.call(());
                    }
                },
                "Sign Up"
            }
        }
    }
}
