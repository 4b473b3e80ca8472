//! Invocation-shape and toolchain-option parsing.
//!
//! Two invocation shapes are accepted: a 5-token "build in place"
//! shape whose first two extra tokens carry the toolchain options,
//! and a 3-token "install" shape carrying none. The option tokens are
//! consumed so the external builder never sees them.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Which of the two accepted invocation shapes was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvocationShape {
    /// 5 tokens: program, OpenMP flag, root build directory, builder args.
    BuildInPlace,
    /// 3 tokens: program, builder args only.
    Install,
}

/// Build-time toolchain options supplied by the invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainOptions {
    /// Whether to enable OpenMP in the produced extension.
    pub openmp_enabled: bool,
    /// Root of the NOMAD build tree; empty in the install shape.
    pub root_build_dir: String,
}

impl Default for ToolchainOptions {
    fn default() -> Self {
        Self {
            openmp_enabled: false,
            root_build_dir: String::new(),
        }
    }
}

/// A parsed invocation: shape, options, and the arguments left over
/// for the external builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub shape: InvocationShape,
    pub options: ToolchainOptions,
    /// The argument sequence with the two option tokens removed.
    pub passthrough_args: Vec<String>,
}

/// Parse the raw invocation argument sequence (program name included).
pub fn parse_invocation(args: &[String]) -> Result<Invocation> {
    match args.len() {
        5 => {
            let options = ToolchainOptions {
                openmp_enabled: parse_openmp_flag(&args[1]),
                root_build_dir: args[2].clone(),
            };
            // Drop tokens 1 and 2 so the builder sees only its own args.
            let mut passthrough_args = Vec::with_capacity(3);
            passthrough_args.push(args[0].clone());
            passthrough_args.extend(args[3..].iter().cloned());
            Ok(Invocation {
                shape: InvocationShape::BuildInPlace,
                options,
                passthrough_args,
            })
        }
        3 => Ok(Invocation {
            shape: InvocationShape::Install,
            options: ToolchainOptions::default(),
            passthrough_args: args.to_vec(),
        }),
        got => Err(ConfigError::InvalidArguments { got }),
    }
}

/// Lenient integer-boolean parse: the integer 1 enables OpenMP; any
/// other integer, or a token that is not an integer at all, disables
/// it rather than being rejected.
fn parse_openmp_flag(token: &str) -> bool {
    token.parse::<i64>().map(|v| v == 1).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn build_in_place_shape() {
        let args = argv(&["prog", "1", "/build", "build_ext", "--inplace"]);
        let inv = parse_invocation(&args).unwrap();
        assert_eq!(inv.shape, InvocationShape::BuildInPlace);
        assert!(inv.options.openmp_enabled);
        assert_eq!(inv.options.root_build_dir, "/build");
        assert_eq!(inv.passthrough_args, argv(&["prog", "build_ext", "--inplace"]));
    }

    #[test]
    fn install_shape() {
        let args = argv(&["prog", "install", "--user"]);
        let inv = parse_invocation(&args).unwrap();
        assert_eq!(inv.shape, InvocationShape::Install);
        assert_eq!(inv.options, ToolchainOptions::default());
        assert_eq!(inv.passthrough_args, args);
    }

    #[test]
    fn rejects_other_arities() {
        for n in [0usize, 1, 2, 4, 6, 9] {
            let args: Vec<String> = (0..n).map(|i| format!("t{i}")).collect();
            match parse_invocation(&args) {
                Err(ConfigError::InvalidArguments { got }) => assert_eq!(got, n),
                other => panic!("arity {n} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn arity_error_names_both_shapes() {
        let err = parse_invocation(&argv(&["prog"])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains('5') && msg.contains('3'), "message: {msg}");
    }

    #[test]
    fn openmp_flag_is_lenient() {
        assert!(parse_openmp_flag("1"));
        assert!(parse_openmp_flag("01")); // still the integer 1
        assert!(!parse_openmp_flag("0"));
        assert!(!parse_openmp_flag("2"));
        assert!(!parse_openmp_flag("yes"));
        assert!(!parse_openmp_flag(""));
    }

    #[test]
    fn non_numeric_flag_disables_openmp() {
        let args = argv(&["prog", "true", "/build", "build_ext", "--inplace"]);
        let inv = parse_invocation(&args).unwrap();
        assert!(!inv.options.openmp_enabled);
    }
}
