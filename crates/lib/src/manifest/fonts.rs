/// Directories searched for fonts at runtime, highest precedence first.
///
/// The first match wins. `/fonts` is both the embed target of the full
/// variant and the directory lite callers populate through `FS`.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
  "/fonts",
  "/usr/share/fonts",
  "/usr/share/X11/fonts/Type1",
  "/usr/share/X11/fonts/TTF",
  "/usr/local/share/fonts",
];
