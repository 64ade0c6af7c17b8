use thiserror::Error;

/// Enumerates high-level errors returned by this library.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Represents a query parameter that could not be understood.
    #[error("Invalid value {value:?} for query parameter {parameter:?}")]
    InvalidQuery {
        parameter: &'static str,
        value: String,
    },

    /// Represents a lookup of a game the catalog doesn't know.
    #[error("Game not found")]
    GameNotFound { id: String },

    /// Represents a lookup of a guide the catalog doesn't know.
    #[error("Guide not found")]
    GuideNotFound { id: String },

    /// Represents a request for a path no route serves.
    #[error("Page not found")]
    RouteNotFound { path: String },
}

impl BackendError {
    /// Whether the error means something doesn't exist, rather than that
    /// the request was malformed.
    pub fn is_not_found(&self) -> bool {
        use BackendError::*;

        matches!(
            self,
            GameNotFound { .. } | GuideNotFound { .. } | RouteNotFound { .. }
        )
    }
}
