use mambo_standards::LookupLoadError;

/// Failure of a whole pipeline run.
///
/// Only setup can fail; individual rows always produce a record.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Lookups(#[from] LookupLoadError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
