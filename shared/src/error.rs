//! # Application Error Type
//!
//! One error type covers every failure the dashboard surfaces to the user.
//! The `Display` text of each variant is what the error banner shows, so the
//! messages are written for people, not for logs.
//!
//! ## Error Categories
//!
//! - **Wallet**: provider missing, request rejected, no accounts, RPC errors
//! - **Storage**: local storage unavailable or refusing writes
//! - **Data**: mock data sources failing or returning unusable values
//! - **Render**: a view could not be drawn (caught by the error boundary)

use thiserror::Error;

/// EIP-1193 code for "user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Error surfaced by wallet, storage and data operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Please install MetaMask or another Web3 wallet")]
    NoProvider,

    #[error("Connection request was rejected in the wallet")]
    UserRejected,

    #[error("The wallet did not return any accounts")]
    NoAccounts,

    #[error("Wallet error {code}: {message}")]
    Provider { code: i64, message: String },

    #[error("Unexpected wallet response: {0}")]
    InvalidResponse(String),

    #[error("Local storage error: {0}")]
    Storage(String),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Rendering failed: {0}")]
    Render(String),
}

impl AppError {
    /// Map an EIP-1193 provider error (code + message) to an [`AppError`].
    ///
    /// Providers that throw plain strings have no code; those become
    /// [`AppError::InvalidResponse`].
    pub fn from_provider(code: Option<i64>, message: impl Into<String>) -> Self {
        match code {
            Some(USER_REJECTED_CODE) => AppError::UserRejected,
            Some(code) => AppError::Provider {
                code,
                message: message.into(),
            },
            None => AppError::InvalidResponse(message.into()),
        }
    }

    /// Whether the user can simply try again (no setup problem on their side).
    pub fn is_retryable(&self) -> bool {
        !matches!(self, AppError::NoProvider | AppError::Render(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_rejection_maps_to_rejected() {
        assert_eq!(
            AppError::from_provider(Some(4001), "User rejected the request."),
            AppError::UserRejected
        );
    }

    #[test]
    fn test_other_codes_keep_message() {
        let err = AppError::from_provider(Some(-32603), "Internal JSON-RPC error.");
        assert_eq!(err.to_string(), "Wallet error -32603: Internal JSON-RPC error.");
    }

    #[test]
    fn test_missing_code_is_invalid_response() {
        let err = AppError::from_provider(None, "boom");
        assert_eq!(err, AppError::InvalidResponse("boom".to_string()));
    }

    #[test]
    fn test_banner_text_for_missing_provider() {
        assert_eq!(
            AppError::NoProvider.to_string(),
            "Please install MetaMask or another Web3 wallet"
        );
        assert!(!AppError::NoProvider.is_retryable());
        assert!(AppError::UserRejected.is_retryable());
    }
}
