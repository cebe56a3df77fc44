//! The site navigation header.
//!
//! Composes the theme store read, the dropdown and drawer controllers and
//! the viewport classification into one surface. Each piece of transient
//! state is owned by exactly one controller; user input mutates one
//! controller per event and the header re-renders from the union.

use crate::app::components::{AuthButtons, Brand, DesktopNav, NavDrawer, ThemeToggle};
use crate::config::{NavConfig, DEFAULT_NAV};
use crate::shared::hooks::{use_drawer, use_menu, use_viewport_width, ViewportClass};
use crate::shared::state::ThemeStore;
use dioxus::prelude::*;

#[component]
pub fn SiteHeader(
    #[props(default)] config: Option<NavConfig>,
    on_login_request: Option<EventHandler<()>>,
    on_signup_request: Option<EventHandler<()>>,
) -> Element {
    let config = config.unwrap_or_else(|| DEFAULT_NAV.clone());

    let store = ThemeStore;
    let mode = store.read_mode();

    let menu = use_menu();
    // Drawer state exists on every viewport; it is only reachable on narrow
    // ones.
    let drawer = use_drawer();

    let width = use_viewport_width();
    let viewport = ViewportClass::classify(width(), config.breakpoint_px);

    let drawer_expanded = if drawer.is_open() { "true" } else { "false" };

    rsx! {
        header { class: "c-header", "data-theme": mode.as_str(),
            div { class: "c-header__inner",
                div { class: "c-header__left",
                    Brand { name: config.brand.clone() }
                    if viewport.is_narrow() {
                        button {
                            class: "c-header__hamburger",
                            r#type: "button",
                            aria_label: "Open navigation",
                            aria_expanded: drawer_expanded,
                            onclick: move |_| drawer.toggle(),
                            "☰"
                        }
                    } else {
                        DesktopNav {
                            links: config.links.clone(),
                            submenu: config.analysis.clone(),
                            menu,
                        }
                    }
                }
                div { class: "c-header__actions",
                    ThemeToggle {}
                    if !viewport.is_narrow() {
                        AuthButtons { on_login_request, on_signup_request }
                    }
                }
            }
            if viewport.is_narrow() {
                NavDrawer {
                    drawer,
                    config: config.clone(),
                    on_login_request,
                    on_signup_request,
                }
            }
        }
    }
}
