//! Build-configuration resolver for the PyNomad extension module.
//!
//! Given the raw invocation arguments, the host platform, and a
//! toolchain environment store, derives the complete set of compiler
//! flags, linker flags, include paths, and library link paths needed
//! to build a Python extension that links against the three
//! precompiled NOMAD shared libraries.
//!
//! ## Modules
//!
//! - [`platform`] — host platform enumeration and library naming
//! - [`library`] — the fixed NOMAD runtime library triple
//! - [`invocation`] — invocation-shape and toolchain-option parsing
//! - [`env`] — explicit toolchain environment store
//! - [`plan`] — the resolved [`BuildPlan`] output value
//! - [`resolver`] — the resolution pipeline itself
//! - [`error`] — error types

pub mod env;
pub mod error;
pub mod invocation;
pub mod library;
pub mod plan;
pub mod platform;
pub mod resolver;

// Re-export key types for convenience
pub use env::ToolchainEnv;
pub use error::{ConfigError, Result};
pub use invocation::{Invocation, InvocationShape, ToolchainOptions};
pub use library::RuntimeLib;
pub use plan::{BuildPlan, Resolution};
pub use platform::Platform;
pub use resolver::resolve;
