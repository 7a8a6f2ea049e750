use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::progress::use_progress_driver;
use crate::routes::Route;
use crate::views::EvaluateModal;

// Card center x-coordinates on the fixed 880px diagram canvas.
const BACKEND_X: [f64; 3] = [240.0, 440.0, 640.0];
const FRONTEND_X: [f64; 5] = [200.0, 320.0, 440.0, 560.0, 680.0];
const ARROW_COLORS: [&str; 3] = ["#2563eb", "#0891b2", "#0d9488"];

/// Staggered reveal of the simulated architecture: backend cards, then
/// frontend cards, then one connector set per backend card. A single
/// driver paces the whole sequence; visibility is derived per index.
#[component]
pub fn OverviewView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let profile = ctx.timer_profile();
    let evaluations = ctx.evaluations();

    let backend_cards = evaluations.backend_cards();
    let frontend_cards = evaluations.frontend_cards();
    let reveal = use_progress_driver(
        evaluations.reveal_count(),
        profile.reveal_tick(),
        Duration::ZERO,
        None,
    );

    let mut show_evaluation = use_signal(|| false);

    let backend_count = backend_cards.len();
    let frontend_count = frontend_cards.len();
    let arrow_set_revealed =
        move |set: usize| reveal.revealed(backend_count + frontend_count + set);

    rsx! {
        div { class: "page overview-page",
            h2 { class: "page-title", "Backend to Frontend System Overview" }

            div { class: "overview-canvas",
                div { class: "overview-row overview-row--backend",
                    for (index, card) in backend_cards.iter().enumerate() {
                        div {
                            class: if reveal.revealed(index) {
                                "overview-card overview-card--backend overview-card--visible"
                            } else {
                                "overview-card overview-card--backend"
                            },
                            h3 { class: "overview-card__title", "{card.title()}" }
                            p { class: "overview-card__description", "{card.description()}" }
                        }
                    }
                }

                svg {
                    class: "overview-arrows",
                    view_box: "0 0 880 64",
                    for set in 0..backend_count {
                        for (target, x2) in FRONTEND_X.iter().enumerate() {
                            line {
                                class: if arrow_set_revealed(set)
                                    && reveal.revealed(backend_count + target)
                                {
                                    "overview-arrow overview-arrow--visible"
                                } else {
                                    "overview-arrow"
                                },
                                x1: "{BACKEND_X[set]}",
                                y1: "4",
                                x2: "{x2}",
                                y2: "60",
                                stroke: ARROW_COLORS[set],
                                stroke_width: "3",
                            }
                        }
                    }
                }

                div { class: "overview-row overview-row--frontend",
                    for (index, card) in frontend_cards.iter().enumerate() {
                        div {
                            class: if reveal.revealed(backend_count + index) {
                                "overview-card overview-card--frontend overview-card--visible"
                            } else {
                                "overview-card overview-card--frontend"
                            },
                            h3 { class: "overview-card__title", "{card.title()}" }
                            p { class: "overview-card__description", "{card.description()}" }
                        }
                    }
                }
            }

            div { class: "page-actions",
                button {
                    class: "button button-primary",
                    r#type: "button",
                    onclick: move |_| show_evaluation.set(true),
                    "Run Evaluation"
                }
            }

            // One indicator dot per connector set.
            div { class: "overview-status",
                for set in 0..backend_count {
                    div {
                        class: if arrow_set_revealed(set) {
                            "overview-status__dot overview-status__dot--on"
                        } else {
                            "overview-status__dot"
                        },
                    }
                }
            }

            if show_evaluation() {
                EvaluateModal {
                    on_close: move |()| show_evaluation.set(false),
                    on_complete: move |()| {
                        navigator.push(Route::Results {});
                    },
                }
            }
        }
    }
}
