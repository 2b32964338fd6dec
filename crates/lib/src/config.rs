//! Per-invocation build configuration.
//!
//! `get_build_config` is the entry point the toolchain step calls: it resolves
//! the variant, assembles the flags from the shared manifests and returns one
//! self-contained record.

use serde::Serialize;

use crate::error::Result;
use crate::flags::{EmbedMapping, assemble};
use crate::manifest::BASE_EMSCRIPTEN_FLAGS;
use crate::variant::{Resolution, Variant, resolve};

/// Everything needed to compile one variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfiguration {
  pub variant: Variant,
  /// Artifact base name, e.g. `pdfium-lite`
  pub output_name: String,
  /// Module factory function name, e.g. `loadPdfiumLite`
  pub export_name: String,
  /// Final toolchain flags. Order is significant.
  pub flags: Vec<String>,
  pub embed_fonts: bool,
}

impl BuildConfiguration {
  /// Builds the configuration for an already parsed variant.
  pub fn for_variant(variant: Variant) -> Self {
    Self::from_resolution(Resolution::from(variant))
  }

  fn from_resolution(resolution: Resolution) -> Self {
    let embed = resolution.embed_fonts.then_some(&EmbedMapping::FONTS);
    let flags = assemble(
      BASE_EMSCRIPTEN_FLAGS,
      &resolution.export_name,
      &resolution.output_name,
      embed,
    );

    Self {
      variant: resolution.variant,
      output_name: resolution.output_name,
      export_name: resolution.export_name,
      flags,
      embed_fonts: resolution.embed_fonts,
    }
  }

  /// JavaScript loader emitted by the toolchain, e.g. `pdfium-full.js`
  pub fn output_file(&self) -> String {
    format!("{}.js", self.output_name)
  }

  /// WebAssembly binary emitted next to the loader
  pub fn wasm_file(&self) -> String {
    format!("{}.wasm", self.output_name)
  }
}

/// Returns the build configuration for a variant string.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidVariant`](crate::ConfigError::InvalidVariant)
/// unchanged from the resolver when `variant` is not `full` or `lite`.
pub fn get_build_config(variant: &str) -> Result<BuildConfiguration> {
  let resolution = resolve(variant)?;
  Ok(BuildConfiguration::from_resolution(resolution))
}

/// One configuration per supported variant, in [`Variant::ALL`] order
pub fn all_build_configs() -> Vec<BuildConfiguration> {
  Variant::ALL.into_iter().map(BuildConfiguration::for_variant).collect()
}
