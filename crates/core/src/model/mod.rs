mod idea;
mod metric;
mod overview;
mod planning;
mod result;
mod suggestion;

pub use idea::{ExampleIdea, IdeaError, ProjectIdea};
pub use metric::{EvaluationMetric, MetricCategory};
pub use overview::OverviewCard;
pub use planning::PlanningSection;
pub use result::EvaluationRecord;
pub use suggestion::{Impact, Suggestion, SuggestionCategory};
