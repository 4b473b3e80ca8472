//! The resolver's output value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The complete, ordered build configuration for one extension build.
///
/// `compile_args` and `link_args` are append-only ordered sequences;
/// order matters because later flags (e.g. OpenMP) must follow the
/// baseline flags for toolchain compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    /// Extra compiler arguments, in order.
    pub compile_args: Vec<String>,
    /// Extra linker arguments, in order.
    pub link_args: Vec<String>,
    /// Include directories; empty unless building in place.
    pub include_dirs: Vec<String>,
    /// Source language of the binding glue. Always `"c++"`.
    pub language_tag: String,
}

impl BuildPlan {
    /// The fixed source-language tag.
    pub const LANGUAGE: &'static str = "c++";
}

impl fmt::Display for BuildPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Language: {}", self.language_tag)?;
        writeln!(f, "Compile args:")?;
        for arg in &self.compile_args {
            writeln!(f, "  {arg}")?;
        }
        writeln!(f, "Link args:")?;
        for arg in &self.link_args {
            writeln!(f, "  {arg}")?;
        }
        writeln!(f, "Include dirs:")?;
        if self.include_dirs.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for dir in &self.include_dirs {
            writeln!(f, "  {dir}")?;
        }
        Ok(())
    }
}

/// A full resolution: the plan plus the builder-facing leftovers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The assembled build plan.
    pub plan: BuildPlan,
    /// Arguments to hand to the external builder, with the two
    /// toolchain-option tokens removed.
    pub passthrough_args: Vec<String>,
    /// Non-fatal diagnostics (e.g. the macOS OpenMP advisory).
    /// Deliberately not part of the [`BuildPlan`].
    pub advisories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_flags_in_order() {
        let plan = BuildPlan {
            compile_args: vec!["-Wall".into(), "-fopenmp".into()],
            link_args: vec!["-Wl,-rpath,/build/lib".into()],
            include_dirs: vec![],
            language_tag: BuildPlan::LANGUAGE.to_string(),
        };
        let rendered = plan.to_string();
        assert!(rendered.contains("Language: c++"));
        let wall = rendered.find("-Wall").unwrap();
        let omp = rendered.find("-fopenmp").unwrap();
        assert!(wall < omp);
        assert!(rendered.contains("(none)"));
    }
}
