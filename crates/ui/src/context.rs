use std::sync::Arc;

use planforge_core::{Theme, TimerProfile};
use services::{EvaluationService, ResultExporter, SuggestionService};

pub trait UiApp: Send + Sync {
    fn initial_theme(&self) -> Theme;
    fn timer_profile(&self) -> TimerProfile;

    fn evaluations(&self) -> EvaluationService;
    fn suggestions(&self) -> SuggestionService;
    fn exporter(&self) -> Arc<ResultExporter>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_theme: Theme,
    timers: TimerProfile,

    evaluations: EvaluationService,
    suggestions: SuggestionService,
    exporter: Arc<ResultExporter>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_theme: app.initial_theme(),
            timers: app.timer_profile(),
            evaluations: app.evaluations(),
            suggestions: app.suggestions(),
            exporter: app.exporter(),
        }
    }

    #[must_use]
    pub fn initial_theme(&self) -> Theme {
        self.initial_theme
    }

    #[must_use]
    pub fn timer_profile(&self) -> TimerProfile {
        self.timers
    }

    #[must_use]
    pub fn evaluations(&self) -> EvaluationService {
        self.evaluations
    }

    #[must_use]
    pub fn suggestions(&self) -> SuggestionService {
        self.suggestions
    }

    #[must_use]
    pub fn exporter(&self) -> Arc<ResultExporter> {
        Arc::clone(&self.exporter)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
