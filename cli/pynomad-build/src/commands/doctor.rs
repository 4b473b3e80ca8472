//! `pynomad-build doctor` — toolchain diagnostics.

use std::process::Command;

use anyhow::Result;

use pynomad_config::{Platform, RuntimeLib, ToolchainEnv};

/// Print toolchain diagnostic information.
pub fn run(platform_override: Option<&str>) -> Result<()> {
    println!("=== PyNomad Build Doctor ===");
    println!();

    println!("pynomad-build version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let host = platform_override
        .map(str::to_string)
        .unwrap_or_else(|| std::env::consts::OS.to_string());
    let platform = Platform::from_host_os(&host);

    println!("--- Host Platform ---");
    println!("  Identifier: {host}");
    println!("  Platform:   {platform}");
    if platform.is_windows() {
        println!("  Note: the PyNomad extension is not offered on this platform.");
    } else {
        println!("  Runtime libraries:");
        for lib in RuntimeLib::ALL {
            println!("    {}", lib.file_name(platform));
        }
    }
    println!();

    println!("--- Toolchain ---");
    let mut env = ToolchainEnv::from_process(&["CC", "CXX"]);
    let cc_defaulted = env.set_if_unset("CC", "gcc");
    let cxx_defaulted = env.set_if_unset("CXX", "g++");
    print_compiler_status("CC", env.get("CC").unwrap_or("gcc"), cc_defaulted);
    print_compiler_status("CXX", env.get("CXX").unwrap_or("g++"), cxx_defaulted);

    Ok(())
}

fn print_compiler_status(var: &str, compiler: &str, defaulted: bool) {
    let origin = if defaulted { "default" } else { "environment" };
    match Command::new(compiler).arg("--version").output() {
        Ok(output) => {
            let version = String::from_utf8_lossy(&output.stdout);
            let first_line = version.lines().next().unwrap_or("(unknown version)");
            println!("  {var}={compiler} ({origin}): {first_line}");
        }
        Err(_) => {
            println!("  {var}={compiler} ({origin}): not found");
        }
    }
}
