use dioxus::prelude::*;

use planforge_core::Theme;

use crate::theme::use_theme;

/// The one control allowed to write the theme.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let current = theme.current();

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: "Switch to {current.toggled().label()} theme",
            onclick: move |_| theme.toggle(),
            if current == Theme::Light {
                svg {
                    class: "theme-toggle__icon",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "1.6",
                    stroke_linecap: "round",
                    path { d: "M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z" }
                }
            } else {
                svg {
                    class: "theme-toggle__icon",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "1.6",
                    stroke_linecap: "round",
                    circle { cx: "12", cy: "12", r: "4" }
                    path { d: "M12 2v2" }
                    path { d: "M12 20v2" }
                    path { d: "M4.9 4.9l1.4 1.4" }
                    path { d: "M17.7 17.7l1.4 1.4" }
                    path { d: "M2 12h2" }
                    path { d: "M20 12h2" }
                    path { d: "M4.9 19.1l1.4-1.4" }
                    path { d: "M17.7 6.3l1.4-1.4" }
                }
            }
        }
    }
}
