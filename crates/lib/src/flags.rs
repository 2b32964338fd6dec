//! Final flag assembly.
//!
//! The toolchain is sensitive to flag order (repeated settings are
//! last-writer-wins), so the assembler only ever appends to a fresh copy of
//! the base sequence in a fixed recipe. It never reorders or deduplicates.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::consts::{EMBED_FONTS_DIR, EMBED_FONTS_TARGET};

/// Marker preceding a `KEY=VALUE` toolchain setting
pub const SETTING_FLAG: &str = "-s";
/// Marker preceding the output file name
pub const OUTPUT_FLAG: &str = "-o";
/// Marker preceding a `source@target` asset mapping
pub const EMBED_FILE_FLAG: &str = "--embed-file";

/// A host directory bundled into the module's virtual filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmbedMapping<'a> {
  pub source: &'a str,
  pub target: &'a str,
}

impl EmbedMapping<'static> {
  /// The font directory bundled into the full variant
  pub const FONTS: Self = Self {
    source: EMBED_FONTS_DIR,
    target: EMBED_FONTS_TARGET,
  };
}

impl fmt::Display for EmbedMapping<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}@{}", self.source, self.target)
  }
}

/// Builds the final flag sequence for one invocation.
///
/// Appends to a copy of `base_flags`, in order: the export-name setting, the
/// output file, and the asset mapping when `embed` is given.
pub fn assemble(
  base_flags: &[&str],
  export_name: &str,
  output_name: &str,
  embed: Option<&EmbedMapping<'_>>,
) -> Vec<String> {
  let mut flags: Vec<String> = base_flags.iter().map(|s| s.to_string()).collect();

  flags.push(SETTING_FLAG.to_string());
  flags.push(format!("EXPORT_NAME={}", export_name));

  flags.push(OUTPUT_FLAG.to_string());
  flags.push(format!("{}.js", output_name));

  if let Some(mapping) = embed {
    flags.push(EMBED_FILE_FLAG.to_string());
    flags.push(mapping.to_string());
  }

  debug!(
    base = base_flags.len(),
    total = flags.len(),
    embed = embed.is_some(),
    "assembled flags"
  );
  flags
}

/// Joins tokens into one POSIX shell command line.
///
/// Tokens made only of shell-safe characters are emitted as-is; anything else
/// is single-quoted. Token order is preserved.
pub fn shell_join<S: AsRef<str>>(tokens: &[S]) -> String {
  tokens
    .iter()
    .map(|t| quote(t.as_ref()))
    .collect::<Vec<_>>()
    .join(" ")
}

fn quote(token: &str) -> String {
  let safe = !token.is_empty()
    && token
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '=' | '@' | ':' | ',' | '+' | '%'));
  if safe {
    token.to_string()
  } else {
    format!("'{}'", token.replace('\'', r"'\''"))
  }
}
