/// User-facing failure classification for view actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    ExportFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::ExportFailed => "Could not write the results file. Please try again.",
        }
    }
}
