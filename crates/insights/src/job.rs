use crate::report::{InsightError, InsightReport};

/// A read-only insight unit over shop data.
///
/// Jobs consume **snapshots** via their `Input` type; this crate stays
/// engine-agnostic and inputs are provided by callers.
pub trait InsightJob: Send + Sync + 'static {
    type Input: Send + Sync + 'static;

    /// The input snapshot the job will report on.
    fn input(&self) -> &Self::Input;

    /// Produce the insight report.
    ///
    /// Must not mutate shop state.
    fn run(&self) -> Result<InsightReport, InsightError>;
}
