//! Host platform enumeration.
//!
//! The platform is resolved once at the boundary from an opaque host
//! identifier; all downstream branching is an exhaustive match over
//! this closed enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The host platform a build configuration is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// Linux and any otherwise-unrecognized POSIX host.
    Linux,
    /// macOS (Darwin).
    Macos,
    /// Windows. Recognized but rejected by the resolver.
    Windows,
}

impl Platform {
    /// Resolve an opaque host identifier to a platform.
    ///
    /// Identifiers starting with `win` are Windows, `darwin`/`macos`
    /// is macOS, and everything else falls back to Linux.
    pub fn from_host_os(identifier: &str) -> Self {
        if identifier.starts_with("win") {
            Platform::Windows
        } else if identifier == "darwin" || identifier == "macos" {
            Platform::Macos
        } else {
            Platform::Linux
        }
    }

    /// Shared-library file extension used on this platform.
    pub fn lib_extension(&self) -> &'static str {
        match self {
            Platform::Linux => "so",
            Platform::Macos => "dylib",
            Platform::Windows => "lib",
        }
    }

    /// Whether this is the (unsupported) Windows platform.
    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Linux => "linux",
            Platform::Macos => "macos",
            Platform::Windows => "windows",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_prefix_match() {
        assert_eq!(Platform::from_host_os("win32"), Platform::Windows);
        assert_eq!(Platform::from_host_os("windows"), Platform::Windows);
    }

    #[test]
    fn darwin_and_macos() {
        assert_eq!(Platform::from_host_os("darwin"), Platform::Macos);
        assert_eq!(Platform::from_host_os("macos"), Platform::Macos);
    }

    #[test]
    fn everything_else_is_linux() {
        assert_eq!(Platform::from_host_os("linux"), Platform::Linux);
        assert_eq!(Platform::from_host_os("freebsd"), Platform::Linux);
        assert_eq!(Platform::from_host_os(""), Platform::Linux);
    }

    #[test]
    fn lib_extensions() {
        assert_eq!(Platform::Linux.lib_extension(), "so");
        assert_eq!(Platform::Macos.lib_extension(), "dylib");
        assert_eq!(Platform::Windows.lib_extension(), "lib");
    }

    #[test]
    fn display_names() {
        assert_eq!(Platform::Macos.to_string(), "macos");
        assert_eq!(Platform::Windows.to_string(), "windows");
    }
}
