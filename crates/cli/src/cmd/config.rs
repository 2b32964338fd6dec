//! Implementation of the `pdfium-wasm config` command.
//!
//! Prints the complete configuration record for one variant.

use anyhow::{Context, Result};
use tracing::info;

use pdfium_wasm_lib::flags::EmbedMapping;
use pdfium_wasm_lib::{get_build_config, shell_join};

use crate::output::{OutputFormat, print_json, print_stat, print_success};

pub fn cmd_config(variant: &str, output: OutputFormat) -> Result<()> {
  let config = get_build_config(variant).with_context(|| format!("Failed to build configuration for '{}'", variant))?;
  info!(variant = %config.variant, flags = config.flags.len(), "configuration ready");

  if output.is_json() {
    let json_output = serde_json::json!({
      "variant": config.variant,
      "output_name": config.output_name,
      "export_name": config.export_name,
      "flags": config.flags,
      "embed_fonts": config.embed_fonts,
      "output_file": config.output_file(),
      "wasm_file": config.wasm_file(),
    });
    print_json(&json_output)?;
  } else {
    print_success(&format!("Build configuration: {}", config.variant));
    print_stat("Output", &format!("{} + {}", config.output_file(), config.wasm_file()));
    print_stat("Export name", &config.export_name);
    let embed = if config.embed_fonts {
      format!("yes ({})", EmbedMapping::FONTS)
    } else {
      "no (load fonts at runtime through FS)".to_string()
    };
    print_stat("Embed fonts", &embed);
    print_stat("Flags", &shell_join(&config.flags));
  }

  Ok(())
}
