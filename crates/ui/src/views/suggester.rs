use dioxus::prelude::*;
use dioxus_router::use_navigator;

use planforge_core::catalog::IMPLEMENTATION_STEPS;
use planforge_core::model::{Suggestion, SuggestionCategory};
use services::{SuggestionFilter, SuggestionService};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::Modal;

const FILTER_CHIPS: [(&str, SuggestionFilter); 4] = [
    ("Tech", SuggestionFilter::Category(SuggestionCategory::Tech)),
    (
        "Marketing",
        SuggestionFilter::Category(SuggestionCategory::Marketing),
    ),
    (
        "Product",
        SuggestionFilter::Category(SuggestionCategory::Product),
    ),
    ("High Impact", SuggestionFilter::HighImpact),
];

/// Grid of canned strategic recommendations with filter chips, a shuffle
/// refresh, and a detail modal.
#[component]
pub fn SuggesterView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let profile = ctx.timer_profile();
    let service: SuggestionService = ctx.suggestions();

    let mut filter = use_signal(SuggestionFilter::default);
    let mut page = use_signal(move || service.visible(SuggestionFilter::All));
    let mut refreshing = use_signal(|| false);
    let mut selected = use_signal(|| None::<&'static Suggestion>);

    let apply_filter = use_callback(move |next: SuggestionFilter| {
        let value = if filter() == next {
            SuggestionFilter::All
        } else {
            next
        };
        filter.set(value);
        page.set(service.visible(value));
    });

    let on_refresh = use_callback(move |()| {
        if refreshing() {
            return;
        }
        refreshing.set(true);
        spawn(async move {
            tokio::time::sleep(profile.refresh_delay()).await;
            filter.set(SuggestionFilter::All);
            page.set(service.refreshed());
            refreshing.set(false);
        });
    });

    rsx! {
        div { class: "page suggester-page",
            header { class: "suggester-header",
                div { class: "suggester-header__heading",
                    button {
                        class: "button button-secondary suggester-header__back",
                        r#type: "button",
                        onclick: move |_| {
                            navigator.push(Route::Overview {});
                        },
                        "Back"
                    }
                    div {
                        h2 { class: "page-title", "Strategic Recommendations" }
                        p { class: "suggester-header__subtitle",
                            "AI-powered suggestions to improve your business"
                        }
                    }
                }
                button {
                    class: "button button-primary",
                    r#type: "button",
                    disabled: refreshing(),
                    onclick: move |_| on_refresh.call(()),
                    if refreshing() { "Shuffling..." } else { "Generate New Ideas" }
                }
            }

            div { class: "suggester-filters",
                span { class: "suggester-filters__label", "Filter by:" }
                for (label, chip) in FILTER_CHIPS {
                    button {
                        class: if filter() == chip {
                            "chip chip--filter chip--filter-active"
                        } else {
                            "chip chip--filter"
                        },
                        r#type: "button",
                        onclick: move |_| apply_filter.call(chip),
                        "{label}"
                    }
                }
            }

            div { class: "suggester-grid",
                for suggestion in page() {
                    SuggestionCard {
                        suggestion,
                        on_select: move |s| selected.set(Some(s)),
                    }
                }
            }

            if let Some(suggestion) = selected() {
                Modal {
                    title: suggestion.title(),
                    on_close: move |()| selected.set(None),
                    div { class: "suggestion-detail",
                        div { class: "suggestion-detail__tags",
                            span { class: "chip chip--category", "{suggestion.category()}" }
                            span { class: "chip chip--impact", "{suggestion.impact().label()}" }
                        }
                        section { class: "suggestion-detail__section",
                            h3 { "Business Benefit" }
                            p { "{suggestion.benefit()}" }
                        }
                        section { class: "suggestion-detail__section",
                            h3 { "Strategic Reasoning" }
                            p { "{suggestion.reason()}" }
                        }
                        section { class: "suggestion-detail__section",
                            h3 { "Implementation Steps" }
                            ol { class: "suggestion-detail__steps",
                                for step in IMPLEMENTATION_STEPS {
                                    li { "{step}" }
                                }
                            }
                        }
                        div { class: "suggestion-detail__actions",
                            button {
                                class: "button button-secondary",
                                r#type: "button",
                                onclick: move |_| selected.set(None),
                                "Close"
                            }
                            button {
                                class: "button button-primary",
                                r#type: "button",
                                "Implement Strategy"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SuggestionCard(
    suggestion: &'static Suggestion,
    on_select: EventHandler<&'static Suggestion>,
) -> Element {
    rsx! {
        div { class: "suggestion-card",
            div { class: "suggestion-card__heading",
                h3 { class: "suggestion-card__title", "{suggestion.title()}" }
            }
            p { class: "suggestion-card__summary",
                "{suggestion.benefit()} {suggestion.reason()}"
            }
            div { class: "suggestion-card__tags",
                span { class: "chip chip--category", "{suggestion.category()}" }
                span { class: "chip chip--impact", "{suggestion.impact().label()}" }
            }
            div { class: "suggestion-card__footer",
                button {
                    class: "suggestion-card__details",
                    r#type: "button",
                    onclick: move |_| on_select.call(suggestion),
                    "View Details"
                }
            }
        }
    }
}
