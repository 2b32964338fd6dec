//! Implementation of the `pdfium-wasm fonts` command.

use anyhow::Result;

use pdfium_wasm_lib::manifest::DEFAULT_FONT_PATHS;

use crate::output::{OutputFormat, print_json};

pub fn cmd_fonts(output: OutputFormat) -> Result<()> {
  if output.is_json() {
    print_json(&DEFAULT_FONT_PATHS)?;
  } else {
    for path in DEFAULT_FONT_PATHS {
      println!("{}", path);
    }
  }
  Ok(())
}
