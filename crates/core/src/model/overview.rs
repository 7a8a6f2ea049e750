/// A backend or frontend box on the system-overview diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverviewCard {
    title: &'static str,
    description: &'static str,
}

impl OverviewCard {
    #[must_use]
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }
}
