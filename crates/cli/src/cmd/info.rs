//! Implementation of the `pdfium-wasm info` command.

use anyhow::Result;

use pdfium_wasm_lib::consts::PDFIUM_VERSION;
use pdfium_wasm_lib::flags::EmbedMapping;
use pdfium_wasm_lib::manifest::{EXPORTED_FUNCTIONS, EXPORTED_RUNTIME_METHODS};
use pdfium_wasm_lib::all_build_configs;

use crate::output::{OutputFormat, print_info, print_json, print_stat, symbols};

pub fn cmd_info(output: OutputFormat) -> Result<()> {
  let configs = all_build_configs();

  if output.is_json() {
    let variants: Vec<_> = configs
      .iter()
      .map(|c| serde_json::json!({ "variant": c.variant, "output_name": c.output_name, "export_name": c.export_name, "embed_fonts": c.embed_fonts }))
      .collect();
    let json_output = serde_json::json!({ "version": env!("CARGO_PKG_VERSION"), "pdfium_version": PDFIUM_VERSION, "variants": variants, "embed": EmbedMapping::FONTS, "exported_functions": EXPORTED_FUNCTIONS.len(), "exported_runtime_methods": EXPORTED_RUNTIME_METHODS.len() });
    print_json(&json_output)?;
    return Ok(());
  }

  print_info(&format!("pdfium-wasm v{}", env!("CARGO_PKG_VERSION")));
  print_stat("PDFium", PDFIUM_VERSION);
  print_stat("Font embed", &EmbedMapping::FONTS.to_string());
  print_stat(
    "Exports",
    &format!(
      "{} functions, {} runtime methods",
      EXPORTED_FUNCTIONS.len(),
      EXPORTED_RUNTIME_METHODS.len()
    ),
  );
  println!();
  println!("Variants:");
  for config in &configs {
    let marker = if config.embed_fonts { symbols::PLUS } else { symbols::MINUS };
    println!(
      "  {} {:<4} {} ({})",
      marker,
      config.variant.as_str(),
      config.output_file(),
      config.export_name
    );
  }

  Ok(())
}
