//! Unified error type for the convenience API.

use soluna_core::CoreError;
use soluna_search::SearchError;
use soluna_time::TimeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SolunaError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_passes_through() {
        let err = SolunaError::from(CoreError::InvalidLocation("longitude must be finite"));
        assert_eq!(err.to_string(), "invalid location: longitude must be finite");
    }

    #[test]
    fn search_errors_convert() {
        let err: SolunaError = SearchError::Time(TimeError::NonFinite(f64::NAN)).into();
        assert!(matches!(err, SolunaError::Search(SearchError::Time(_))));
    }
}
