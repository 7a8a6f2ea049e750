use dioxus::prelude::*;

use planforge_core::StepStatus;
use planforge_core::model::MetricCategory;

use crate::context::AppContext;
use crate::progress::use_progress_driver;
use crate::views::components::Modal;

/// Step-by-step walk over the 20-metric checklist.
///
/// The host mounts this modal only while it is open, so the driver starts
/// from zero on every open and its ticker dies with the modal. `on_complete`
/// fires once, after the completion linger.
#[component]
pub fn EvaluateModal(on_close: EventHandler<()>, on_complete: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let profile = ctx.timer_profile();
    let metrics = ctx.evaluations().metrics();

    let driver = use_progress_driver(
        metrics.len(),
        profile.evaluation_tick(),
        profile.completion_delay(),
        Some(on_complete),
    );
    let complete = driver.is_complete();
    let total = metrics.len();

    rsx! {
        Modal { title: "System Evaluation", on_close,
            div { class: "evaluation",
                div { class: "evaluation__categories",
                    span { class: "chip chip--backend", "Backend Metrics" }
                    span { class: "chip chip--frontend", "Frontend Metrics" }
                }

                div { class: "progress",
                    div {
                        class: "progress__fill",
                        style: "width: {driver.percent()}%",
                    }
                }

                div { class: "evaluation__steps",
                    for (index, metric) in metrics.iter().enumerate() {
                        MetricRow {
                            title: metric.title(),
                            description: metric.description(),
                            category: metric.category(),
                            status: driver.status_of(index),
                            last: index + 1 == total,
                        }
                    }
                }

                if complete {
                    div { class: "evaluation__banner",
                        h3 { class: "evaluation__banner-title", "Evaluation Complete!" }
                        p { class: "evaluation__banner-note",
                            "All {total} metrics have been successfully evaluated."
                        }
                    }
                }

                div { class: "evaluation__actions",
                    button {
                        class: if complete {
                            "button button-primary"
                        } else {
                            "button button-secondary"
                        },
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        if complete { "Close" } else { "Cancel" }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricRow(
    title: &'static str,
    description: &'static str,
    category: MetricCategory,
    status: StepStatus,
    last: bool,
) -> Element {
    let (row_class, icon_class) = match status {
        StepStatus::Active => ("metric metric--active", "metric__icon metric__icon--active"),
        StepStatus::Completed => (
            "metric metric--completed",
            "metric__icon metric__icon--completed",
        ),
        StepStatus::Pending => ("metric", "metric__icon"),
    };
    let chip_class = match category {
        MetricCategory::Backend => "chip chip--backend",
        MetricCategory::Frontend => "chip chip--frontend",
    };

    rsx! {
        div { class: "{row_class}",
            if !last {
                div { class: "metric__connector" }
            }
            div { class: "{icon_class}",
                if status == StepStatus::Completed {
                    svg {
                        class: "metric__check",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M5 13l4 4 10-10" }
                    }
                }
            }
            div { class: "metric__body",
                div { class: "metric__heading",
                    h3 { class: "metric__title", "{title}" }
                    span { class: "{chip_class}", "{category.label()}" }
                }
                p { class: "metric__description", "{description}" }
            }
        }
    }
}
