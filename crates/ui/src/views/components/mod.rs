mod footer;
mod modal;
mod step_wizard;
mod theme_toggle;

pub use footer::Footer;
pub use modal::Modal;
pub use step_wizard::StepWizard;
pub use theme_toggle::ThemeToggle;
