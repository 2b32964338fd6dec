//! Static manifests shared by every variant.
//!
//! The export lists describe the boundary of the compiled module and are
//! identical for `full` and `lite`. The base flags are the toolchain options
//! every variant starts from, and the font paths are what a consumer of the
//! module searches at runtime.

mod base_flags;
mod exports;
mod fonts;

pub use base_flags::BASE_EMSCRIPTEN_FLAGS;
pub use exports::{
  EXPORTED_FUNCTIONS, EXPORTED_RUNTIME_METHODS, exported_functions_setting, exported_runtime_methods_setting,
};
pub use fonts::DEFAULT_FONT_PATHS;
