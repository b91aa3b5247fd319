use thiserror::Error;

/// The application's error type.
///
/// Expected business-rule failures (wrong password, duplicate email,
/// unknown notice id) are reported through return values, not through this
/// enum; only contract violations and cache I/O surface here.
#[derive(Error, Debug)]
pub enum AppError {
    /// An I/O error from the persisted session cache.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialization error from the persisted session cache.
    #[error("Serialization error: {0}")]
    Serialization(#[from] sonic_rs::Error),

    /// A session-dependent operation was invoked without an active session.
    #[error("Authorization failed")]
    Unauthorized,
}

/// A `Result` type that uses `AppError` as the error type.
pub type Result<T> = std::result::Result<T, AppError>;
