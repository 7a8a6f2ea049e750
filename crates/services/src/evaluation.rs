use planforge_core::catalog::{
    BACKEND_CARDS, EVALUATION_METRICS, EVALUATION_RECORDS, FRONTEND_CARDS,
};
use planforge_core::model::{EvaluationMetric, EvaluationRecord, MetricCategory, OverviewCard};

/// Read-side access to the canned evaluation catalog.
///
/// The catalog is static, so this service holds no state; it exists to keep
/// views off the raw tables and to give the step counts a single source.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvaluationService;

impl EvaluationService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The full checklist, in the order the evaluation modal walks it.
    #[must_use]
    pub fn metrics(&self) -> &'static [EvaluationMetric] {
        &EVALUATION_METRICS
    }

    /// Step count for the evaluation driver.
    #[must_use]
    pub fn metric_count(&self) -> usize {
        EVALUATION_METRICS.len()
    }

    #[must_use]
    pub fn metrics_in(&self, category: MetricCategory) -> Vec<&'static EvaluationMetric> {
        EVALUATION_METRICS
            .iter()
            .filter(|metric| metric.category() == category)
            .collect()
    }

    #[must_use]
    pub fn records(&self) -> &'static [EvaluationRecord] {
        &EVALUATION_RECORDS
    }

    #[must_use]
    pub fn backend_cards(&self) -> &'static [OverviewCard] {
        &BACKEND_CARDS
    }

    #[must_use]
    pub fn frontend_cards(&self) -> &'static [OverviewCard] {
        &FRONTEND_CARDS
    }

    /// Step count for the overview reveal driver: every backend card, every
    /// frontend card, then one arrow set per backend card.
    #[must_use]
    pub fn reveal_count(&self) -> usize {
        BACKEND_CARDS.len() + FRONTEND_CARDS.len() + BACKEND_CARDS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_split_covers_the_catalog() {
        let service = EvaluationService::new();
        let backend = service.metrics_in(MetricCategory::Backend);
        let frontend = service.metrics_in(MetricCategory::Frontend);
        assert_eq!(backend.len(), 10);
        assert_eq!(frontend.len(), 10);
        assert_eq!(backend.len() + frontend.len(), service.metric_count());
    }

    #[test]
    fn reveal_count_matches_the_overview_sequence() {
        // 3 backend cards, 5 frontend cards, 3 arrow sets.
        assert_eq!(EvaluationService::new().reveal_count(), 11);
    }
}
