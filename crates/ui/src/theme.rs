use dioxus::prelude::*;

use planforge_core::Theme;

/// Owner of the process-wide theme.
///
/// Provided once at the app root. Every view reads through
/// [`current`](Self::current); the toggle control in the layout header is
/// the only caller of [`toggle`](Self::toggle), so there is exactly one
/// write path.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeController {
    theme: Signal<Theme>,
}

impl ThemeController {
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: Signal::new(initial),
        }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        (self.theme)()
    }

    /// The single write path.
    pub fn set(&mut self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn toggle(&mut self) {
        let next = self.current().toggled();
        self.set(next);
    }
}

/// Install the controller at the root of the component tree.
pub fn provide_theme(initial: Theme) -> ThemeController {
    use_context_provider(|| ThemeController::new(initial))
}

/// Read access for any view below the root.
#[must_use]
pub fn use_theme() -> ThemeController {
    use_context::<ThemeController>()
}
