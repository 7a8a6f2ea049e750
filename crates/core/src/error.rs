use thiserror::Error;

use crate::model::IdeaError;
use crate::theme::ThemeParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Idea(#[from] IdeaError),
    #[error(transparent)]
    Theme(#[from] ThemeParseError),
}
