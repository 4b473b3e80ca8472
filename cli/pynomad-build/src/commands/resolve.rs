//! `pynomad-build resolve` — run the resolver and emit the plan document.

use std::collections::BTreeMap;
use std::fs;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use pynomad_config::{resolve, BuildPlan, Platform, Resolution, ToolchainEnv};

/// The document handed to the external extension builder: the plan,
/// the builder's own arguments, and the toolchain variables to build
/// with.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanDocument {
    pub passthrough_args: Vec<String>,
    pub plan: BuildPlan,
    pub toolchain_env: BTreeMap<String, String>,
}

/// Run the resolve command against the real process state.
pub fn run(
    tokens: &[String],
    platform_override: Option<&str>,
    format: Option<&str>,
    output: Option<&str>,
) -> Result<()> {
    let host = platform_override
        .map(str::to_string)
        .unwrap_or_else(|| std::env::consts::OS.to_string());
    let platform = Platform::from_host_os(&host);

    // Reconstruct the raw setup argv: invoked name plus the tokens, so
    // 4 trailing tokens form the 5-token build-in-place shape and 2
    // form the 3-token install shape.
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "pynomad-build".to_string());
    let mut argv = Vec::with_capacity(tokens.len() + 1);
    argv.push(program);
    argv.extend(tokens.iter().cloned());

    let env = run_with_argv(&argv, platform, format, output)?;

    // Export the (possibly defaulted) toolchain to the process so the
    // external builder inherits it.
    for (key, value) in env.iter() {
        std::env::set_var(key, value);
    }

    Ok(())
}

/// Resolve `argv` for `platform` and emit the plan document. Returns
/// the post-resolution toolchain environment for the caller to apply.
pub fn run_with_argv(
    argv: &[String],
    platform: Platform,
    format: Option<&str>,
    output: Option<&str>,
) -> Result<ToolchainEnv> {
    let mut env = ToolchainEnv::from_process(&["CC", "CXX"]);
    let resolution = resolve(argv, platform, &mut env)
        .with_context(|| format!("resolving build configuration for {platform}"))?;

    for advisory in &resolution.advisories {
        eprintln!("warning: {advisory}");
    }

    let rendered = render(&resolution, &env, format)?;
    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("writing {path}"))?;
        }
        None => print!("{rendered}"),
    }

    Ok(env)
}

fn render(resolution: &Resolution, env: &ToolchainEnv, format: Option<&str>) -> Result<String> {
    let doc = PlanDocument {
        passthrough_args: resolution.passthrough_args.clone(),
        plan: resolution.plan.clone(),
        toolchain_env: env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    };

    match format {
        None | Some("human") => Ok(render_human(&doc)),
        Some("json") => {
            let mut text =
                serde_json::to_string_pretty(&doc).context("serializing plan to JSON")?;
            text.push('\n');
            Ok(text)
        }
        Some("toml") => toml::to_string_pretty(&doc).context("serializing plan to TOML"),
        Some(other) => bail!("unknown format: '{other}'. Choose: human, json, toml"),
    }
}

fn render_human(doc: &PlanDocument) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = write!(out, "{}", doc.plan);
    let _ = writeln!(out, "Builder args:");
    for arg in &doc.passthrough_args {
        let _ = writeln!(out, "  {arg}");
    }
    let _ = writeln!(out, "Toolchain:");
    for (key, value) in &doc.toolchain_env {
        let _ = writeln!(out, "  {key}={value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resolution() -> (Resolution, ToolchainEnv) {
        let argv: Vec<String> = ["setup", "1", "/build", "build_ext", "--inplace"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        let mut env = ToolchainEnv::new();
        let resolution = resolve(&argv, Platform::Linux, &mut env).unwrap();
        (resolution, env)
    }

    #[test]
    fn human_render_covers_all_sections() {
        let (resolution, env) = sample_resolution();
        let text = render(&resolution, &env, None).unwrap();
        assert!(text.contains("Compile args:"));
        assert!(text.contains("Builder args:"));
        assert!(text.contains("CC=gcc"));
        assert!(text.contains("CXX=g++"));
    }

    #[test]
    fn json_render_round_trips() {
        let (resolution, env) = sample_resolution();
        let text = render(&resolution, &env, Some("json")).unwrap();
        let doc: PlanDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(doc.plan, resolution.plan);
        assert_eq!(doc.passthrough_args, resolution.passthrough_args);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let (resolution, env) = sample_resolution();
        assert!(render(&resolution, &env, Some("xml")).is_err());
    }
}
