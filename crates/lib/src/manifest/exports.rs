/// PDFium entry points callable from outside the module.
///
/// A closed allowlist; names carry the leading underscore the toolchain
/// expects for C symbols.
pub const EXPORTED_FUNCTIONS: &[&str] = &[
  // Library management
  "_PDFium_Init",
  "_FPDF_InitLibrary",
  "_FPDF_InitLibraryWithConfig",
  "_FPDF_DestroyLibrary",
  "_FPDF_SetSandBoxPolicy",
  // Document handling
  "_FPDF_LoadDocument",
  "_FPDF_LoadMemDocument",
  "_FPDF_CloseDocument",
  "_FPDF_GetLastError",
  "_FPDF_GetPageCount",
  // Page handling
  "_FPDF_LoadPage",
  "_FPDF_ClosePage",
  "_FPDF_GetPageWidth",
  "_FPDF_GetPageHeight",
  "_FPDF_GetPageWidthF",
  "_FPDF_GetPageHeightF",
  // Rendering
  "_FPDF_RenderPageBitmap",
  "_FPDF_RenderPageBitmapWithMatrix",
  "_FPDF_FFLDraw",
  // Bitmaps
  "_FPDFBitmap_Create",
  "_FPDFBitmap_CreateEx",
  "_FPDFBitmap_Destroy",
  "_FPDFBitmap_FillRect",
  "_FPDFBitmap_GetBuffer",
  "_FPDFBitmap_GetWidth",
  "_FPDFBitmap_GetHeight",
  "_FPDFBitmap_GetStride",
  "_FPDFBitmap_GetFormat",
  // Text extraction
  "_FPDFText_LoadPage",
  "_FPDFText_ClosePage",
  "_FPDFText_CountChars",
  "_FPDFText_GetText",
  "_FPDFText_GetUnicode",
  "_FPDFText_GetFontSize",
  "_FPDFText_GetCharBox",
  // Page objects
  "_FPDFPage_CountObjects",
  "_FPDFPage_GetObject",
  "_FPDFPageObj_GetType",
  // Image objects
  "_FPDFImageObj_GetBitmap",
  "_FPDFImageObj_GetRenderedBitmap",
  "_FPDFImageObj_GetImagePixelSize",
  "_FPDFImageObj_GetImageDataRaw",
  "_FPDFImageObj_GetImageFilterCount",
  "_FPDFImageObj_GetImageFilter",
  // Forms
  "_FPDFDOC_InitFormFillEnvironment",
  "_FPDFDOC_ExitFormFillEnvironment",
  "_FORM_OnAfterLoadPage",
  "_FORM_OnBeforeClosePage",
  // Raw memory
  "_malloc",
  "_free",
];

/// Host runtime helpers exposed next to the module.
///
/// `FS` must stay in this list for both variants: runtime font loading
/// writes into the virtual filesystem through it.
pub const EXPORTED_RUNTIME_METHODS: &[&str] = &[
  "ccall",
  "cwrap",
  "wasmExports",
  "HEAP8",
  "HEAP16",
  "HEAP32",
  "HEAPU8",
  "HEAPU16",
  "HEAPU32",
  "HEAPF32",
  "HEAPF64",
  "addFunction",
  "removeFunction",
  "setValue",
  "getValue",
  "UTF8ToString",
  "stringToUTF8",
  "lengthBytesUTF8",
  "FS",
];

/// Renders the symbol allowlist as a toolchain setting,
/// e.g. `EXPORTED_FUNCTIONS=["_PDFium_Init",...]`.
pub fn exported_functions_setting() -> Result<String, serde_json::Error> {
  render_setting("EXPORTED_FUNCTIONS", EXPORTED_FUNCTIONS)
}

/// Renders the runtime-method list as a toolchain setting.
pub fn exported_runtime_methods_setting() -> Result<String, serde_json::Error> {
  render_setting("EXPORTED_RUNTIME_METHODS", EXPORTED_RUNTIME_METHODS)
}

fn render_setting(key: &str, values: &[&str]) -> Result<String, serde_json::Error> {
  Ok(format!("{}={}", key, serde_json::to_string(values)?))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_function_is_a_c_symbol() {
    for name in EXPORTED_FUNCTIONS {
      assert!(name.starts_with('_'), "missing underscore: {}", name);
    }
  }

  #[test]
  fn function_allowlist_has_no_duplicates() {
    for (i, name) in EXPORTED_FUNCTIONS.iter().enumerate() {
      assert!(!EXPORTED_FUNCTIONS[i + 1..].contains(name), "duplicate: {}", name);
    }
  }

  #[test]
  fn memory_primitives_are_exported() {
    assert!(EXPORTED_FUNCTIONS.contains(&"_malloc"));
    assert!(EXPORTED_FUNCTIONS.contains(&"_free"));
  }

  #[test]
  fn filesystem_handle_is_exported() {
    assert!(EXPORTED_RUNTIME_METHODS.contains(&"FS"));
  }

  #[test]
  fn functions_setting_is_a_json_array() {
    let setting = exported_functions_setting().unwrap();
    assert!(setting.starts_with("EXPORTED_FUNCTIONS=[\"_PDFium_Init\",\"_FPDF_InitLibrary\","));
    assert!(setting.ends_with("\"_malloc\",\"_free\"]"));
  }

  #[test]
  fn runtime_methods_setting_round_trips() {
    let setting = exported_runtime_methods_setting().unwrap();
    let json = setting.strip_prefix("EXPORTED_RUNTIME_METHODS=").unwrap();
    let parsed: Vec<String> = serde_json::from_str(json).unwrap();
    assert_eq!(parsed, EXPORTED_RUNTIME_METHODS);
  }
}
