use crate::shared::state::ThemeStore;
use dioxus::prelude::*;

/// Theme toggle button. Reads the global store for the current mode and
/// dispatches a toggle request on activation; the store owns the state.
#[component]
pub fn ThemeToggle() -> Element {
    let store = ThemeStore;
    let mode = store.read_mode();

    // Glyph shows the mode a click switches to
    let target_name = mode.toggled().as_str();

    rsx! {
        button {
            class: "c-theme-toggle",
            r#type: "button",
            aria_label: "Switch to {target_name} mode",
            onclick: move |_| store.request_toggle(),
            span { class: "c-theme-toggle__glyph", "{mode.target_glyph()}" }
        }
    }
}
