use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "app-footer",
            p { class: "app-footer__brand", "Planforge" }
            p { class: "app-footer__note",
                "All analysis on these screens is simulated for demonstration."
            }
        }
    }
}
