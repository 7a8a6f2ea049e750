#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod progress;
pub mod theme;

pub use error::Error;
pub use progress::{DriverState, ProgressDriver, StepStatus, TickOutcome, TimerProfile};
pub use theme::Theme;
