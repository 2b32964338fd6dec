//! Fixed names and paths shared by the manifests and the assembler.

/// Upstream PDFium branch the manifests were written against.
pub const PDFIUM_VERSION: &str = "chromium/6721";

/// Host directory holding the fonts bundled into the full variant.
pub const EMBED_FONTS_DIR: &str = "/embed-fonts";

/// Where the bundled fonts appear inside the module's virtual filesystem.
pub const EMBED_FONTS_TARGET: &str = "/fonts";

/// Prefix shared by every output artifact name.
pub const OUTPUT_PREFIX: &str = "pdfium";
