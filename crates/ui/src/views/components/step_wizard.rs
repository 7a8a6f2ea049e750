use dioxus::prelude::*;

use planforge_core::catalog::WIZARD_STEPS;

/// Horizontal step indicator shown on the guided screens.
///
/// Steps at or before `current_step` render as reached; identity is the
/// position in the fixed sequence.
#[component]
pub fn StepWizard(current_step: usize) -> Element {
    rsx! {
        div { class: "wizard",
            for (index, (title, description)) in WIZARD_STEPS.iter().enumerate() {
                div { class: "wizard__step",
                    if index > 0 {
                        div {
                            class: if index <= current_step {
                                "wizard__connector wizard__connector--reached"
                            } else {
                                "wizard__connector"
                            },
                        }
                    }
                    if index <= current_step {
                        svg {
                            class: "wizard__icon wizard__icon--reached",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            circle { cx: "12", cy: "12", r: "10" }
                            path { d: "M8 12l3 3 5-6" }
                        }
                    } else {
                        svg {
                            class: "wizard__icon",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            circle { cx: "12", cy: "12", r: "10" }
                        }
                    }
                    p { class: "wizard__title", "{title}" }
                    p { class: "wizard__description", "{description}" }
                }
            }
        }
    }
}
