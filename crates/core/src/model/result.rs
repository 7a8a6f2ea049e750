use serde::Serialize;

/// One canned evaluation result block.
///
/// `backend`/`frontend` are 1-based indices into the overview card catalogs,
/// matching how the results screen labels each pairing. The scores carry no
/// derivation; they are placeholders by construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EvaluationRecord {
    id: u32,
    backend: u32,
    frontend: u32,
    backend_score: f64,
    frontend_score: f64,
    analysis: &'static str,
}

impl EvaluationRecord {
    #[must_use]
    pub const fn new(
        id: u32,
        backend: u32,
        frontend: u32,
        backend_score: f64,
        frontend_score: f64,
        analysis: &'static str,
    ) -> Self {
        Self {
            id,
            backend,
            frontend,
            backend_score,
            frontend_score,
            analysis,
        }
    }

    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub const fn backend(&self) -> u32 {
        self.backend
    }

    #[must_use]
    pub const fn frontend(&self) -> u32 {
        self.frontend
    }

    #[must_use]
    pub const fn backend_score(&self) -> f64 {
        self.backend_score
    }

    #[must_use]
    pub const fn frontend_score(&self) -> f64 {
        self.frontend_score
    }

    #[must_use]
    pub const fn analysis(&self) -> &'static str {
        self.analysis
    }
}
