//! The resolution pipeline.
//!
//! One-shot and deterministic: validate the platform and invocation,
//! then assemble the flag sequences in a fixed order. The only effect
//! outside the return value is toolchain defaulting on the
//! caller-supplied environment store.

use crate::env::ToolchainEnv;
use crate::error::{ConfigError, Result};
use crate::invocation::{parse_invocation, InvocationShape};
use crate::library::RuntimeLib;
use crate::plan::{BuildPlan, Resolution};
use crate::platform::Platform;

/// Resolve a complete build configuration from the raw invocation
/// arguments (program name included), the host platform, and the
/// toolchain environment.
pub fn resolve(
    args: &[String],
    platform: Platform,
    env: &mut ToolchainEnv,
) -> Result<Resolution> {
    // Platform gate before anything else: no partial plan for Windows.
    if platform.is_windows() {
        return Err(ConfigError::UnsupportedPlatform { platform });
    }

    let invocation = parse_invocation(args)?;
    let options = &invocation.options;

    // String concatenation only; a missing path surfaces later as a
    // linker failure in the external builder.
    let build_lib_dir = format!("{}/src", options.root_build_dir);
    let installed_lib_dir = format!("{}/lib", options.root_build_dir);

    let mut compile_args = vec!["-Wall".to_string()];
    // Branch kept explicit even though Windows is gated above, so the
    // flag set stays correct if the gate is ever relaxed.
    if !platform.is_windows() {
        compile_args.push("-std=c++14".to_string());
        compile_args.push("-Wextra".to_string());
        compile_args.push("-pthread".to_string());
    }

    let mut link_args = Vec::new();
    let mut advisories = Vec::new();
    if options.openmp_enabled {
        if !platform.is_windows() {
            compile_args.push("-fopenmp".to_string());
            link_args.push("-fopenmp".to_string());
        }
        if platform == Platform::Macos {
            advisories.push(
                "the PyNomad interface may fail on macos when building with OpenMP; \
                 if this happens, deactivate OpenMP for building NOMAD and PyNomad"
                    .to_string(),
            );
        }
        // Tells the NOMAD headers themselves that OpenMP is in play.
        compile_args.push("-DUSE_OMP".to_string());
    }

    env.set_if_unset("CC", "gcc");
    env.set_if_unset("CXX", "g++");

    // Embed the installed-library directory so the produced module
    // finds the runtime libraries without LD_LIBRARY_PATH at run time.
    if !platform.is_windows() {
        link_args.push(format!("-Wl,-rpath,{installed_lib_dir}"));
    }
    if platform == Platform::Macos {
        // Leaves room to rewrite install-name references after the
        // libraries are relocated.
        link_args.push("-headerpad_max_install_names".to_string());
    }
    for lib in RuntimeLib::ALL {
        link_args.push(lib.link_path(platform, &build_lib_dir));
    }

    let include_dirs = match invocation.shape {
        InvocationShape::BuildInPlace => {
            vec![format!("{}/../../src", options.root_build_dir)]
        }
        InvocationShape::Install => Vec::new(),
    };

    Ok(Resolution {
        plan: BuildPlan {
            compile_args,
            link_args,
            include_dirs,
            language_tag: BuildPlan::LANGUAGE.to_string(),
        },
        passthrough_args: invocation.passthrough_args,
        advisories,
    })
}
