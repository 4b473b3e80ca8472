//! Error types for build-configuration resolution.

use crate::platform::Platform;

/// Errors that can occur during build-configuration resolution.
///
/// Both variants are fatal and detected before any flag assembly
/// begins; no partial plan is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The extension is not offered on this host platform.
    #[error("the {platform} platform is not supported")]
    UnsupportedPlatform {
        /// The rejected host platform.
        platform: Platform,
    },

    /// Wrong invocation arity.
    #[error(
        "expected 5 arguments (building in place, with the OpenMP flag and \
         the root build directory) or 3 arguments (installing), got {got}"
    )]
    InvalidArguments {
        /// The argument count that was actually supplied.
        got: usize,
    },
}

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
