use thiserror::Error;

/// Which of the page's two network calls a failure belongs to.
///
/// Every failure is logged exactly once at the UI boundary, so the log line
/// has to name the call on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    MintQuery,
    MetadataFetch,
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Call::MintQuery => write!(f, "mint account query"),
            Call::MetadataFetch => write!(f, "metadata fetch"),
        }
    }
}

/// Anything that can go wrong while assembling a
/// [`TokenView`](crate::TokenView).
///
/// The page treats all of these identically (log and keep showing the
/// loading placeholder); the variants exist so the log entry says what
/// actually happened.
#[derive(Debug, Error)]
pub enum TokenDataError {
    #[error("\"{0}\" is not a valid base58 account address")]
    InvalidMintAddress(String),

    #[error("{call} could not reach the server: {source}")]
    Network {
        call: Call,
        source: reqwest::Error,
    },

    #[error("{call} returned HTTP {status}")]
    Status {
        call: Call,
        status: reqwest::StatusCode,
    },

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("mint account does not exist")]
    AccountNotFound,

    #[error("account is owned by {owner}, not the token program")]
    WrongOwner { owner: String },

    #[error("{call} response could not be decoded: {reason}")]
    Decode { call: Call, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_call() {
        let err = TokenDataError::Status {
            call: Call::MetadataFetch,
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "metadata fetch returned HTTP 404 Not Found");

        let err = TokenDataError::Decode {
            call: Call::MintQuery,
            reason: "truncated".into(),
        };
        assert!(err.to_string().starts_with("mint account query"));
    }
}
