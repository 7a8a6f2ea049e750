use std::fmt;

/// Grouping used by the suggester's filter chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SuggestionCategory {
    Performance,
    Marketing,
    Product,
    Tech,
}

impl SuggestionCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SuggestionCategory::Performance => "Performance",
            SuggestionCategory::Marketing => "Marketing",
            SuggestionCategory::Product => "Product",
            SuggestionCategory::Tech => "Tech",
        }
    }
}

impl fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Claimed impact of a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Impact::Low => "LOW IMPACT",
            Impact::Medium => "MEDIUM IMPACT",
            Impact::High => "HIGH IMPACT",
        }
    }
}

/// A canned strategic recommendation card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion {
    title: &'static str,
    benefit: &'static str,
    reason: &'static str,
    category: SuggestionCategory,
    impact: Impact,
}

impl Suggestion {
    #[must_use]
    pub const fn new(
        title: &'static str,
        benefit: &'static str,
        reason: &'static str,
        category: SuggestionCategory,
        impact: Impact,
    ) -> Self {
        Self {
            title,
            benefit,
            reason,
            category,
            impact,
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub const fn benefit(&self) -> &'static str {
        self.benefit
    }

    #[must_use]
    pub const fn reason(&self) -> &'static str {
        self.reason
    }

    #[must_use]
    pub const fn category(&self) -> SuggestionCategory {
        self.category
    }

    #[must_use]
    pub const fn impact(&self) -> Impact {
        self.impact
    }
}
