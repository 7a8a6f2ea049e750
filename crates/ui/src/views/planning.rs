use dioxus::prelude::*;
use dioxus_router::use_navigator;

use planforge_core::catalog::PLANNING_SECTIONS;

use crate::routes::Route;
use crate::views::components::StepWizard;

/// Accordion of canned planning sections. At most one section is open.
#[component]
pub fn PlanningView() -> Element {
    let navigator = use_navigator();
    let mut expanded = use_signal(|| None::<&'static str>);

    rsx! {
        div { class: "page planning-page",
            StepWizard { current_step: 1 }
            h2 { class: "page-title", "Project Planning" }

            div { class: "planning-sections",
                for section in PLANNING_SECTIONS {
                    div { class: "planning-section",
                        button {
                            class: "planning-section__toggle",
                            r#type: "button",
                            onclick: move |_| {
                                let next = if expanded() == Some(section.id()) {
                                    None
                                } else {
                                    Some(section.id())
                                };
                                expanded.set(next);
                            },
                            h3 { class: "planning-section__title", "{section.title()}" }
                            span {
                                class: if expanded() == Some(section.id()) {
                                    "planning-section__chevron planning-section__chevron--open"
                                } else {
                                    "planning-section__chevron"
                                },
                            }
                        }
                        if expanded() == Some(section.id()) {
                            p { class: "planning-section__content", "{section.content()}" }
                        }
                    }
                }
            }

            div { class: "page-actions",
                button {
                    class: "button button-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Prompt {});
                    },
                    "Back"
                }
                button {
                    class: "button button-primary",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Requirements {});
                    },
                    "Proceed to Requirement Analysis"
                }
            }
        }
    }
}
