use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::views::components::StepWizard;

#[derive(Clone, Debug, PartialEq, Eq)]
struct ChatMessage {
    text: String,
    from_user: bool,
}

/// Canned requirements chat. Messages stay local to the screen; the
/// "analysis" never answers back.
#[component]
pub fn RequirementsView() -> Element {
    let navigator = use_navigator();
    let mut messages = use_signal(|| {
        vec![ChatMessage {
            text: "Let's analyze your requirements. What specific features do you need?"
                .to_string(),
            from_user: false,
        }]
    });
    let mut input = use_signal(String::new);

    let send = use_callback(move |()| {
        let text = input();
        if text.trim().is_empty() {
            return;
        }
        messages.write().push(ChatMessage {
            text: text.trim().to_string(),
            from_user: true,
        });
        input.set(String::new());
    });

    rsx! {
        div { class: "page requirements-page",
            StepWizard { current_step: 2 }
            h2 { class: "page-title", "Requirement Analysis" }

            div { class: "chat",
                div { class: "chat__log",
                    for message in messages() {
                        div {
                            class: if message.from_user {
                                "chat__row chat__row--user"
                            } else {
                                "chat__row"
                            },
                            div {
                                class: if message.from_user {
                                    "chat__bubble chat__bubble--user"
                                } else {
                                    "chat__bubble"
                                },
                                "{message.text}"
                            }
                        }
                    }
                }
                div { class: "chat__composer",
                    input {
                        class: "chat__input",
                        r#type: "text",
                        value: "{input}",
                        placeholder: "Type your message...",
                        oninput: move |evt| input.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                send.call(());
                            }
                        },
                    }
                    button {
                        class: "button button-primary",
                        r#type: "button",
                        onclick: move |_| send.call(()),
                        "Send"
                    }
                }
            }

            div { class: "page-actions",
                button {
                    class: "button button-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Planning {});
                    },
                    "Back"
                }
                button {
                    class: "button button-primary",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Overview {});
                    },
                    "Proceed to System Design"
                }
            }
        }
    }
}
