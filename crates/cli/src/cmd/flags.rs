//! Implementation of the `pdfium-wasm flags` command.

use anyhow::{Context, Result};

use pdfium_wasm_lib::{get_build_config, shell_join};

use crate::output::{OutputFormat, print_json};

/// Prints the final flags for `variant`.
///
/// Text output is one token per line unless `shell` is set, in which case the
/// whole sequence is printed as a single quoted command line.
pub fn cmd_flags(variant: &str, shell: bool, output: OutputFormat) -> Result<()> {
  let config = get_build_config(variant).with_context(|| format!("Failed to build configuration for '{}'", variant))?;

  if output.is_json() {
    print_json(&config.flags)?;
  } else if shell {
    println!("{}", shell_join(&config.flags));
  } else {
    for token in &config.flags {
      println!("{}", token);
    }
  }

  Ok(())
}
