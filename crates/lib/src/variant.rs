use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::OUTPUT_PREFIX;
use crate::error::{ConfigError, Result};

/// Build variants of the PDFium module
///
/// `Full` bundles the fonts into the binary; `Lite` ships without them and
/// relies on the caller writing fonts into the virtual filesystem at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
  Full,
  Lite,
}

impl Variant {
  /// Every supported variant, in the order they are listed to users
  pub const ALL: [Variant; 2] = [Variant::Full, Variant::Lite];

  /// Returns the lowercase identifier for this variant
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Full => "full",
      Self::Lite => "lite",
    }
  }

  /// Artifact base name, e.g. `pdfium-full`
  pub fn output_name(&self) -> String {
    format!("{}-{}", OUTPUT_PREFIX, self.as_str())
  }

  /// Name of the module factory function the artifact exports
  pub fn export_name(&self) -> &'static str {
    match self {
      Self::Full => "loadPdfiumFull",
      Self::Lite => "loadPdfiumLite",
    }
  }

  pub fn embeds_fonts(&self) -> bool {
    matches!(self, Self::Full)
  }
}

impl fmt::Display for Variant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Variant {
  type Err = ConfigError;

  /// Exact, case-sensitive match against the supported identifiers.
  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|v| v.as_str() == s)
      .ok_or_else(|| ConfigError::InvalidVariant(s.to_string()))
  }
}

/// Naming and embedding decision derived from a variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
  pub variant: Variant,
  pub output_name: String,
  pub export_name: String,
  pub embed_fonts: bool,
}

impl From<Variant> for Resolution {
  fn from(variant: Variant) -> Self {
    Self {
      variant,
      output_name: variant.output_name(),
      export_name: variant.export_name().to_string(),
      embed_fonts: variant.embeds_fonts(),
    }
  }
}

/// Validates a variant string and derives its naming.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidVariant`] carrying the input when it is not
/// exactly `full` or `lite`.
pub fn resolve(variant: &str) -> Result<Resolution> {
  let resolution = Resolution::from(variant.parse::<Variant>()?);
  debug!(
    variant = %resolution.variant,
    output_name = %resolution.output_name,
    export_name = %resolution.export_name,
    embed_fonts = resolution.embed_fonts,
    "resolved variant"
  );
  Ok(resolution)
}
