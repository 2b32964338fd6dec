//! pdfium-wasm-lib: Build configuration for the PDFium WebAssembly module
//!
//! This crate derives everything the toolchain invocation step needs to
//! compile PDFium into one of two module variants:
//! - `Variant`: which assets are embedded (`full`) or loaded at runtime (`lite`)
//! - `BuildConfiguration`: the finalized flags and artifact names for a variant
//! - `manifest`: the exported symbols, runtime methods, base flags and font paths
//!
//! Nothing here touches the filesystem or spawns the compiler.

pub mod config;
pub mod consts;
pub mod error;
pub mod flags;
pub mod manifest;
pub mod variant;

pub use config::{BuildConfiguration, all_build_configs, get_build_config};
pub use error::{ConfigError, Result};
pub use flags::{EmbedMapping, assemble, shell_join};
pub use variant::{Resolution, Variant, resolve};
