use thiserror::Error;

use stockwatch_core::CompanyId;

/// Failure of an alert computation.
///
/// Unknown companies are the only hard stop. Dangling references inside the
/// snapshot degrade individual alerts instead of failing the batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlertError {
    #[error("company {0} not found")]
    CompanyNotFound(CompanyId),
}
