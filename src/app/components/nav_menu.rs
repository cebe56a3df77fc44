use crate::config::{NavLink, SubMenu};
use crate::shared::hooks::{AnchorId, MenuHandle};
use dioxus::prelude::*;

/// Trigger element the open Analysis menu anchors to.
const ANALYSIS_TRIGGER: AnchorId = AnchorId::new("analysis-trigger");

/// Desktop navigation surface: inline primary links plus the Analysis
/// dropdown. Only rendered on wide viewports.
#[component]
pub fn DesktopNav(links: Vec<NavLink>, submenu: SubMenu, menu: MenuHandle) -> Element {
    let expanded = if menu.is_open() { "true" } else { "false" };

    rsx! {
        nav { class: "c-nav", aria_label: "Primary",
            for link in links {
                a { class: "c-nav__link", href: "{link.target}", "{link.label}" }
            }
            div { class: "c-dropdown",
                button {
                    id: ANALYSIS_TRIGGER.as_str(),
                    class: "c-dropdown__trigger",
                    r#type: "button",
                    aria_haspopup: "menu",
                    aria_expanded: expanded,
                    onclick: move |_| menu.toggle(ANALYSIS_TRIGGER),
                    "{submenu.label}"
                    span { class: "c-dropdown__arrow", aria_hidden: "true", "▾" }
                }
                AnalysisMenu { menu, items: submenu.items }
            }
        }
    }
}

/// The open dropdown surface: backdrop for outside-click dismissal plus the
/// item list, positioned under the anchor trigger.
#[component]
fn AnalysisMenu(menu: MenuHandle, items: Vec<NavLink>) -> Element {
    let Some(anchor) = menu.state().anchor() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "c-dropdown__backdrop",
            onclick: move |_| menu.dismiss(),
        }
        ul {
            class: "c-dropdown__menu",
            role: "menu",
            aria_labelledby: anchor.as_str(),
            for (idx, item) in items.into_iter().enumerate() {
                if idx > 0 {
                    li { class: "c-dropdown__separator", role: "separator" }
                }
                li { role: "none",
                    a {
                        class: "c-dropdown__item",
                        role: "menuitem",
                        href: "{item.target}",
                        // The close runs synchronously, before the browser
                        // follows the item's target.
                        onclick: move |_| menu.select(),
                        "{item.label}"
                    }
                }
            }
        }
    }
}
