//! The fixed NOMAD runtime library triple.
//!
//! The extension always links against all three libraries, in the
//! fixed order utils, eval, algos — never a subset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// One of the three precompiled NOMAD shared libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuntimeLib {
    /// Common utilities.
    Utils,
    /// Evaluator layer.
    Eval,
    /// Optimization algorithms.
    Algos,
}

impl RuntimeLib {
    /// All three libraries, in link order.
    pub const ALL: [RuntimeLib; 3] = [RuntimeLib::Utils, RuntimeLib::Eval, RuntimeLib::Algos];

    /// Logical base name, without platform prefix or extension.
    pub fn base_name(&self) -> &'static str {
        match self {
            RuntimeLib::Utils => "nomadUtils",
            RuntimeLib::Eval => "nomadEval",
            RuntimeLib::Algos => "nomadAlgos",
        }
    }

    /// Platform-specific file name: `lib<base>.<ext>` on POSIX,
    /// `<base>.lib` on Windows.
    pub fn file_name(&self, platform: Platform) -> String {
        match platform {
            Platform::Windows => format!("{}.{}", self.base_name(), platform.lib_extension()),
            _ => format!("lib{}.{}", self.base_name(), platform.lib_extension()),
        }
    }

    /// Full link path under the libraries' build directory.
    ///
    /// The Windows branch inserts the `Release/` sub-path used by
    /// multi-configuration generators. It is unreachable behind the
    /// resolver's platform gate but kept correct in case the gate is
    /// ever relaxed.
    pub fn link_path(&self, platform: Platform, build_lib_dir: &str) -> String {
        match platform {
            Platform::Windows => {
                format!("{}/Release/{}", build_lib_dir, self.file_name(platform))
            }
            _ => format!("{}/{}", build_lib_dir, self.file_name(platform)),
        }
    }
}

impl fmt::Display for RuntimeLib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_name())
    }
}
