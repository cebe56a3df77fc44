use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    /// Filled accent button (Sign Up).
    Primary,
    /// Bordered transparent button (Login).
    Outline,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Primary);

    let variant_class = match variant {
        ButtonVariant::Primary => "c-button--primary",
        ButtonVariant::Outline => "c-button--outline",
    };

    rsx! {
        button {
            class: "c-button {variant_class}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
