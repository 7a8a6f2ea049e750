use std::fmt;

/// Which half of the simulated system a metric belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricCategory {
    Backend,
    Frontend,
}

impl MetricCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MetricCategory::Backend => "Backend",
            MetricCategory::Frontend => "Frontend",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the fixed evaluation checklist.
///
/// Identity is positional: the catalog order is the order the evaluation
/// modal walks through, and nothing is ever added or removed at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvaluationMetric {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: MetricCategory,
}

impl EvaluationMetric {
    #[must_use]
    pub const fn new(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        category: MetricCategory,
    ) -> Self {
        Self {
            id,
            title,
            description,
            category,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    #[must_use]
    pub const fn category(&self) -> MetricCategory {
        self.category
    }
}
