//! Implementation of the `pdfium-wasm exports` command.

use anyhow::{Context, Result};

use pdfium_wasm_lib::manifest::{
  EXPORTED_FUNCTIONS, EXPORTED_RUNTIME_METHODS, exported_functions_setting, exported_runtime_methods_setting,
};

use crate::output::{OutputFormat, print_json};

pub fn cmd_exports(runtime: bool, setting: bool, output: OutputFormat) -> Result<()> {
  let names = if runtime {
    EXPORTED_RUNTIME_METHODS
  } else {
    EXPORTED_FUNCTIONS
  };

  if setting {
    let rendered = if runtime {
      exported_runtime_methods_setting()
    } else {
      exported_functions_setting()
    };
    let rendered = rendered.context("Failed to render export setting")?;
    println!("{}", rendered);
  } else if output.is_json() {
    print_json(&names)?;
  } else {
    for name in names {
      println!("{}", name);
    }
  }

  Ok(())
}
