use alloy::sol_types;

/// Error returned while turning order records into fulfillment call data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("fixture read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fixture JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid order field `{field}`: {reason}")]
    Parse { field: String, reason: String },

    #[error("total consideration value exceeds uint256")]
    ValueOverflow,

    #[error("call data decode error: {0}")]
    Decode(#[from] sol_types::Error),
}

impl Error {
    pub(crate) fn parse(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
