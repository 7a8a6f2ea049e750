use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use planforge_core::{Theme, TimerProfile};
use services::{EvaluationService, ResultExporter, SuggestionService};

use crate::context::{UiApp, build_app_context};
use crate::theme::ThemeController;
use crate::views::{
    EvaluateModal, OverviewView, PlanningView, PromptView, RequirementsView, ResultsView,
    SuggesterView,
};

struct TestApp {
    profile: TimerProfile,
    exporter: Arc<ResultExporter>,
}

impl UiApp for TestApp {
    fn initial_theme(&self) -> Theme {
        Theme::Light
    }

    fn timer_profile(&self) -> TimerProfile {
        self.profile
    }

    fn evaluations(&self) -> EvaluationService {
        EvaluationService::new()
    }

    fn suggestions(&self) -> SuggestionService {
        SuggestionService::new()
    }

    fn exporter(&self) -> Arc<ResultExporter> {
        Arc::clone(&self.exporter)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Prompt,
    Planning,
    Requirements,
    Overview,
    Results,
    Suggester,
    Evaluate,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| ThemeController::new(Theme::Light));
    rsx! { Router::<TestRoute> {} }
}

#[component]
fn FullAppHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| ThemeController::new(Theme::Light));
    rsx! { Router::<crate::routes::Route> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Prompt => rsx! { PromptView {} },
        ViewKind::Planning => rsx! { PlanningView {} },
        ViewKind::Requirements => rsx! { RequirementsView {} },
        ViewKind::Overview => rsx! { OverviewView {} },
        ViewKind::Results => rsx! { ResultsView {} },
        ViewKind::Suggester => rsx! { SuggesterView {} },
        ViewKind::Evaluate => rsx! { EvaluateProbe {} },
    }
}

/// Mounts the evaluation modal and mirrors its callbacks into the DOM so
/// smoke tests can assert on rendered text alone.
#[component]
fn EvaluateProbe() -> Element {
    let mut completions = use_signal(|| 0_usize);
    let mut closes = use_signal(|| 0_usize);

    rsx! {
        p { id: "evaluate-probe", "completions: {completions()}, closes: {closes()}" }
        EvaluateModal {
            on_close: move |()| {
                let next = closes() + 1;
                closes.set(next);
            },
            on_complete: move |()| {
                let next = completions() + 1;
                completions.set(next);
            },
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive the dom until the rendered HTML contains `needle`, within a
    /// bounded number of rounds.
    pub async fn drive_until(&mut self, needle: &str) -> bool {
        for _ in 0..80 {
            if self.render().contains(needle) {
                return true;
            }
            self.drive_async().await;
        }
        self.render().contains(needle)
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        harness_props(view, TimerProfile::fast()),
    );
    ViewHarness { dom }
}

/// Harness over the real route table, including the layout chrome.
pub fn setup_full_app_harness() -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        FullAppHarness,
        harness_props(ViewKind::Prompt, TimerProfile::fast()),
    );
    ViewHarness { dom }
}

fn harness_props(view: ViewKind, profile: TimerProfile) -> ViewHarnessProps {
    let exporter = Arc::new(ResultExporter::new(
        std::env::temp_dir().join(format!("planforge-ui-smoke-{}.json", std::process::id())),
    ));
    let app = Arc::new(TestApp { profile, exporter });
    ViewHarnessProps { app, view }
}
