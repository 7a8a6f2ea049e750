use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::Link;

use planforge_core::model::EvaluationRecord;

use crate::context::AppContext;
use crate::progress::use_progress_driver;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{ScoreTier, format_score};

// The loader walks 20 increments of 5%.
const LOADER_STEPS: usize = 20;

/// Simulated loading bar, then the grid of canned result blocks.
#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let profile = ctx.timer_profile();
    let records = ctx.evaluations().records();
    let exporter = ctx.exporter();

    let loader = use_progress_driver(LOADER_STEPS, profile.loader_tick(), Duration::ZERO, None);
    let mut export_error = use_signal(|| None::<ViewError>);
    let mut exported_to = use_signal(|| None::<String>);

    let on_download = move |_| {
        match exporter.export() {
            Ok(path) => {
                exported_to.set(Some(path.display().to_string()));
                export_error.set(None);
            }
            Err(_) => {
                export_error.set(Some(ViewError::ExportFailed));
                exported_to.set(None);
            }
        }
    };

    if !loader.is_complete() {
        return rsx! {
            div { class: "page results-loading",
                span { class: "pulse-dots",
                    span { class: "pulse-dots__dot" }
                    span { class: "pulse-dots__dot" }
                    span { class: "pulse-dots__dot" }
                }
                h2 { class: "results-loading__title", "Loading evaluation results..." }
                div { class: "progress",
                    div {
                        class: "progress__fill",
                        style: "width: {loader.percent()}%",
                    }
                }
                p { class: "results-loading__percent", "{loader.percent()}% Complete" }
            }
        };
    }

    rsx! {
        div { class: "page results-page",
            header { class: "results-header",
                h2 { class: "page-title", "Evaluation Results" }
                div { class: "results-header__actions",
                    Link {
                        class: "button button-secondary",
                        to: Route::Suggestions {},
                        "View Suggestions"
                    }
                    button {
                        class: "button button-primary",
                        r#type: "button",
                        onclick: on_download,
                        "Download"
                    }
                }
            }

            if let Some(err) = export_error() {
                p { class: "banner banner--error", "{err.message()}" }
            }
            if let Some(path) = exported_to() {
                p { class: "banner banner--ok", "Results written to {path}" }
            }

            div { class: "results-grid",
                for record in records.iter().copied() {
                    ResultCard { record }
                }
            }
        }
    }
}

#[component]
fn ResultCard(record: EvaluationRecord) -> Element {
    let backend_tier = ScoreTier::for_score(record.backend_score());
    let frontend_tier = ScoreTier::for_score(record.frontend_score());

    rsx! {
        div { class: "result-card",
            header { class: "result-card__header",
                h3 { class: "result-card__title",
                    "Backend {record.backend()}, Frontend {record.frontend()}"
                }
            }
            div { class: "result-card__scores",
                div { class: "result-card__score-row",
                    span { class: "result-card__score-label", "Backend Score:" }
                    span { class: "{backend_tier.css_class()}",
                        "{format_score(record.backend_score())}"
                    }
                }
                div { class: "result-card__score-row",
                    span { class: "result-card__score-label", "Frontend Score:" }
                    span { class: "{frontend_tier.css_class()}",
                        "{format_score(record.frontend_score())}"
                    }
                }
            }
            div { class: "result-card__analysis",
                h4 { "Analysis" }
                p { "{record.analysis()}" }
            }
        }
    }
}
