use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::theme::use_theme;
use crate::views::components::{Footer, ThemeToggle};
use crate::views::{
    OverviewView, PlanningView, PromptView, RequirementsView, ResultsView, SuggesterView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", PromptView)] Prompt {},
        #[route("/planning", PlanningView)] Planning {},
        #[route("/requirements", RequirementsView)] Requirements {},
        #[route("/overview", OverviewView)] Overview {},
        #[route("/results", ResultsView)] Results {},
        #[route("/suggestions", SuggesterView)] Suggestions {},
}

#[component]
fn Layout() -> Element {
    let theme = use_theme();

    rsx! {
        div { class: "app {theme.current().css_class()}",
            header { class: "app-header",
                ThemeToggle {}
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
