use dioxus::prelude::*;

/// Overlay dialog shared by the evaluation run and the suggestion detail.
///
/// Clicking the backdrop or the close control fires `on_close`; the host
/// decides what closing means. Closing is always permitted, including
/// mid-run.
#[component]
pub fn Modal(title: &'static str, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "modal__header",
                    h2 { class: "modal__title", "{title}" }
                    button {
                        class: "modal__close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }
                div { class: "modal__body", {children} }
            }
        }
    }
}
