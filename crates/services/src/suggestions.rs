use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use planforge_core::catalog::SUGGESTIONS;
use planforge_core::model::{Impact, Suggestion, SuggestionCategory};

/// How many suggestion cards a page shows at once.
pub const VISIBLE_LIMIT: usize = 6;

/// Filter chip state on the suggester screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SuggestionFilter {
    #[default]
    All,
    Category(SuggestionCategory),
    HighImpact,
}

impl SuggestionFilter {
    #[must_use]
    pub fn matches(self, suggestion: &Suggestion) -> bool {
        match self {
            SuggestionFilter::All => true,
            SuggestionFilter::Category(category) => suggestion.category() == category,
            SuggestionFilter::HighImpact => suggestion.impact() == Impact::High,
        }
    }
}

/// Selects which canned suggestions a page displays.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuggestionService;

impl SuggestionService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Up to [`VISIBLE_LIMIT`] suggestions matching `filter`, in catalog order.
    #[must_use]
    pub fn visible(&self, filter: SuggestionFilter) -> Vec<&'static Suggestion> {
        SUGGESTIONS
            .iter()
            .filter(|suggestion| filter.matches(suggestion))
            .take(VISIBLE_LIMIT)
            .collect()
    }

    /// A freshly shuffled page, for the refresh control.
    #[must_use]
    pub fn refreshed(&self) -> Vec<&'static Suggestion> {
        self.refreshed_with(&mut rand::rng())
    }

    /// Shuffle with a caller-supplied generator. Tests seed this.
    #[must_use]
    pub fn refreshed_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&'static Suggestion> {
        let mut pool: Vec<&'static Suggestion> = SUGGESTIONS.iter().collect();
        pool.shuffle(rng);
        pool.truncate(VISIBLE_LIMIT);
        debug!(count = pool.len(), "shuffled suggestion page");
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_page_caps_at_the_visible_limit() {
        let page = SuggestionService::new().visible(SuggestionFilter::All);
        assert_eq!(page.len(), VISIBLE_LIMIT);
    }

    #[test]
    fn category_filter_only_returns_that_category() {
        let page = SuggestionService::new()
            .visible(SuggestionFilter::Category(SuggestionCategory::Marketing));
        assert!(!page.is_empty());
        assert!(
            page.iter()
                .all(|s| s.category() == SuggestionCategory::Marketing)
        );
    }

    #[test]
    fn high_impact_filter_only_returns_high_impact() {
        let page = SuggestionService::new().visible(SuggestionFilter::HighImpact);
        assert!(!page.is_empty());
        assert!(page.iter().all(|s| s.impact() == Impact::High));
    }

    #[test]
    fn refresh_is_deterministic_under_a_seeded_rng() {
        let service = SuggestionService::new();
        let a = service.refreshed_with(&mut StdRng::seed_from_u64(7));
        let b = service.refreshed_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.len(), VISIBLE_LIMIT);
        let titles_a: Vec<_> = a.iter().map(|s| s.title()).collect();
        let titles_b: Vec<_> = b.iter().map(|s| s.title()).collect();
        assert_eq!(titles_a, titles_b);
    }

    #[test]
    fn refresh_draws_from_the_catalog_without_duplicates() {
        let page = SuggestionService::new().refreshed_with(&mut StdRng::seed_from_u64(42));
        for (i, a) in page.iter().enumerate() {
            assert!(SUGGESTIONS.iter().any(|s| s.title() == a.title()));
            for b in &page[i + 1..] {
                assert_ne!(a.title(), b.title());
            }
        }
    }
}
