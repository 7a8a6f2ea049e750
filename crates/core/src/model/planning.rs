/// A collapsible section on the planning screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanningSection {
    id: &'static str,
    title: &'static str,
    content: &'static str,
}

impl PlanningSection {
    #[must_use]
    pub const fn new(id: &'static str, title: &'static str, content: &'static str) -> Self {
        Self { id, title, content }
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
    pub const fn content(&self) -> &'static str {
        self.content
    }
}
