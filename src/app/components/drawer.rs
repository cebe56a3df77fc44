use crate::config::NavConfig;
use crate::shared::hooks::DrawerHandle;
use dioxus::prelude::*;

/// Mobile overlay drawer mirroring the desktop navigation. Selecting any
/// entry (nav link, Analysis sub-menu item, Login, Sign Up) closes the
/// drawer; the close happens before the optional auth callback runs, so it
/// is guaranteed even when the callback is absent.
#[component]
pub fn NavDrawer(
    drawer: DrawerHandle,
    config: NavConfig,
    on_login_request: Option<EventHandler<()>>,
    on_signup_request: Option<EventHandler<()>>,
) -> Element {
    if !drawer.is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "c-drawer__backdrop",
            onclick: move |_| drawer.force_close(),
        }
        aside { class: "c-drawer", role: "dialog", aria_label: "Site navigation",
            div { class: "c-drawer__header",
                span { class: "c-drawer__title", "{config.brand}" }
                button {
                    class: "c-drawer__close",
                    r#type: "button",
                    aria_label: "Close navigation",
                    onclick: move |_| drawer.force_close(),
                    "✕"
                }
            }
            div { class: "c-drawer__divider" }
            nav { class: "c-drawer__nav", aria_label: "Primary",
                ul { class: "c-drawer__list",
                    for link in config.links {
                        li {
                            a {
                                class: "c-drawer__link",
                                href: "{link.target}",
                                onclick: move |_| drawer.force_close(),
                                "{link.label}"
                            }
                        }
                    }
                }
                div { class: "c-drawer__group-label", "{config.analysis.label}" }
                ul { class: "c-drawer__list",
                    for item in config.analysis.items {
                        li {
                            a {
                                class: "c-drawer__link c-drawer__link--sub",
                                href: "{item.target}",
                                onclick: move |_| drawer.force_close(),
                                "{item.label}"
                            }
                        }
                    }
                }
                div { class: "c-drawer__divider" }
                ul { class: "c-drawer__list",
                    li {
                        button {
                            class: "c-drawer__link c-drawer__link--action",
                            r#type: "button",
                            onclick: move |_| {
                                drawer.force_close();
                                if let Some(handler) = &on_login_request {
                                    handler.call(());
                                }
                            },
                            "Login"
                        }
                    }
                    li {
                        button {
                            class: "c-drawer__link c-drawer__link--action",
                            r#type: "button",
                            onclick: move |_| {
                                drawer.force_close();
                                if let Some(handler) = &on_signup_request {
                                    handler.call(());
                                }
                            },
                            "Sign Up"
                        }
                    }
                }
            }
        }
    }
}
