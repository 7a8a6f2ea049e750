use dioxus::prelude::*;
use dioxus_router::use_navigator;

use planforge_core::catalog::EXAMPLE_IDEAS;
use planforge_core::model::ProjectIdea;

use crate::context::AppContext;
use crate::routes::Route;

/// Landing screen: describe an idea, then start the simulated pipeline.
#[component]
pub fn PromptView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let profile = ctx.timer_profile();

    let mut idea = use_signal(String::new);
    let mut is_typing = use_signal(|| false);
    let mut generating = use_signal(|| false);
    let mut web_search = use_signal(|| false);
    let mut deep_think = use_signal(|| false);
    let mut debounce = use_signal(|| None::<Task>);

    let idea_valid = ProjectIdea::new(idea()).is_ok();

    let on_input = move |evt: FormEvent| {
        idea.set(evt.value());
        is_typing.set(true);
        // Cancel before start so two debounce timers never overlap.
        if let Some(task) = debounce.write().take() {
            task.cancel();
        }
        let handle = spawn(async move {
            tokio::time::sleep(profile.typing_debounce()).await;
            is_typing.set(false);
        });
        debounce.set(Some(handle));
    };

    let on_generate = move |_| {
        if generating() || ProjectIdea::new(idea()).is_err() {
            return;
        }
        generating.set(true);
        spawn(async move {
            tokio::time::sleep(profile.generate_delay()).await;
            generating.set(false);
            navigator.push(Route::Planning {});
        });
    };

    rsx! {
        div { class: "page prompt-page",
            div { class: "prompt-hero",
                div { class: "prompt-hero__heading",
                    svg {
                        class: "prompt-hero__icon",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "1.6",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M12 3l1.8 4.9L19 9.7l-4.4 3.2L16 18l-4-2.9L8 18l1.4-5.1L5 9.7l5.2-.8z" }
                    }
                    h1 { "Planforge" }
                }
                p { class: "prompt-hero__tagline",
                    "Transform your idea into a complete technical product"
                }
            }

            div { class: "prompt-form",
                textarea {
                    class: "prompt-form__input",
                    value: "{idea}",
                    placeholder: "Describe your product idea in detail...",
                    oninput: on_input,
                }

                div { class: "prompt-form__toolbar",
                    button {
                        class: "toolbar-button",
                        r#type: "button",
                        title: "Upload files",
                        svg {
                            class: "toolbar-button__icon",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "1.6",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            path { d: "M12 16V4" }
                            path { d: "M7 9l5-5 5 5" }
                            path { d: "M4 20h16" }
                        }
                    }
                    button {
                        class: if web_search() {
                            "toolbar-button toolbar-button--on"
                        } else {
                            "toolbar-button"
                        },
                        r#type: "button",
                        title: "Web search",
                        onclick: move |_| web_search.set(!web_search()),
                        svg {
                            class: "toolbar-button__icon",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "1.6",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            circle { cx: "12", cy: "12", r: "9" }
                            path { d: "M3 12h18" }
                            path { d: "M12 3a15 15 0 0 1 0 18" }
                            path { d: "M12 3a15 15 0 0 0 0 18" }
                        }
                    }
                    button {
                        class: if deep_think() {
                            "toolbar-button toolbar-button--pill toolbar-button--on"
                        } else {
                            "toolbar-button toolbar-button--pill"
                        },
                        r#type: "button",
                        onclick: move |_| deep_think.set(!deep_think()),
                        "DeepThink"
                    }

                    div {
                        class: if is_typing() {
                            "prompt-form__submit prompt-form__submit--typing"
                        } else {
                            "prompt-form__submit"
                        },
                        button {
                            class: "button button-primary",
                            r#type: "button",
                            disabled: !idea_valid || generating(),
                            onclick: on_generate,
                            if generating() {
                                span { class: "pulse-dots",
                                    span { class: "pulse-dots__dot" }
                                    span { class: "pulse-dots__dot" }
                                    span { class: "pulse-dots__dot" }
                                }
                                "Generating..."
                            } else {
                                "Generate Design"
                            }
                        }
                    }
                }
            }

            div { class: "prompt-examples",
                h2 { class: "prompt-examples__heading", "Example Ideas" }
                div { class: "prompt-examples__grid",
                    for example in EXAMPLE_IDEAS {
                        button {
                            class: "example-card",
                            r#type: "button",
                            onclick: move |_| idea.set(example.text().to_string()),
                            span { class: "example-card__icon", "{example.icon()}" }
                            span { class: "example-card__body",
                                p { class: "example-card__text", "{example.text()}" }
                                p { class: "example-card__hint", "Click to use this example" }
                            }
                        }
                    }
                }
            }
        }
    }
}
