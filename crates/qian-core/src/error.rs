//! Error kinds returned by query resolution.
//!
//! Every failure is a value: the caller decides how to phrase it for users.

use std::io;

/// Why a raw query did not resolve to an asset.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A numeral-shaped prefix was found but could not be read as 00–99.
    #[error("unrecognized numeral: {token:?}")]
    UnrecognizedNumeral { token: String },

    /// The text after the numeral matched no entry of the alias table.
    #[error("unrecognized category: {text:?}")]
    UnrecognizedCategory { text: String },

    /// No numeral prefix at the start of the query.
    #[error("query does not start with a numeral")]
    ParseFailure,

    /// Both halves resolved, but the store holds no matching asset.
    #[error("no asset for {numeral}{category}")]
    NotFound { numeral: String, category: String },

    /// The storage collaborator failed while listing candidates.
    #[error("asset store: {0}")]
    Storage(#[from] io::Error),
}

impl QueryError {
    /// True for the kinds caused by the query text itself (as opposed to storage).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            QueryError::UnrecognizedNumeral { .. }
                | QueryError::UnrecognizedCategory { .. }
                | QueryError::ParseFailure
        )
    }
}
