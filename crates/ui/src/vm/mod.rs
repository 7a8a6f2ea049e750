mod score;

pub use score::{ScoreTier, format_score};
