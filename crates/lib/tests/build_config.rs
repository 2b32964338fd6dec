//! Integration tests for the public configuration API.

use pdfium_wasm_lib::manifest::{BASE_EMSCRIPTEN_FLAGS, DEFAULT_FONT_PATHS, EXPORTED_FUNCTIONS, EXPORTED_RUNTIME_METHODS};
use pdfium_wasm_lib::{BuildConfiguration, ConfigError, Variant, all_build_configs, get_build_config, shell_join};

fn expected_flags(variant: &str) -> Vec<String> {
  let mut flags: Vec<String> = BASE_EMSCRIPTEN_FLAGS.iter().map(|s| s.to_string()).collect();
  let export_name = if variant == "full" { "loadPdfiumFull" } else { "loadPdfiumLite" };
  flags.extend([
    "-s".to_string(),
    format!("EXPORT_NAME={}", export_name),
    "-o".to_string(),
    format!("pdfium-{}.js", variant),
  ]);
  if variant == "full" {
    flags.extend(["--embed-file".to_string(), "/embed-fonts@/fonts".to_string()]);
  }
  flags
}

// =============================================================================
// Derivation
// =============================================================================

#[test]
fn names_and_embedding_follow_variant() {
  for variant in ["full", "lite"] {
    let config = get_build_config(variant).unwrap();
    assert_eq!(config.output_name, format!("pdfium-{}", variant));
    assert_eq!(config.embed_fonts, variant == "full");
    assert_eq!(config.variant.as_str(), variant);
  }
  assert_eq!(get_build_config("full").unwrap().export_name, "loadPdfiumFull");
  assert_eq!(get_build_config("lite").unwrap().export_name, "loadPdfiumLite");
}

#[test]
fn flags_are_exactly_the_recipe() {
  for variant in ["full", "lite"] {
    assert_eq!(get_build_config(variant).unwrap().flags, expected_flags(variant));
  }
}

#[test]
fn unsupported_variants_fail() {
  for variant in ["debug", "", "FULL", "Full", "lite\n"] {
    match get_build_config(variant) {
      Err(ConfigError::InvalidVariant(input)) => assert_eq!(input, variant),
      other => panic!("expected InvalidVariant for {:?}, got {:?}", variant, other),
    }
  }
}

#[test]
fn repeated_calls_are_identical() {
  for variant in ["full", "lite"] {
    assert_eq!(get_build_config(variant).unwrap(), get_build_config(variant).unwrap());
  }
}

#[test]
fn no_cross_contamination_between_variants() {
  let full = get_build_config("full").unwrap();
  let lite = get_build_config("lite").unwrap();
  let full_again = get_build_config("full").unwrap();

  assert!(!lite.flags.iter().any(|t| t == "--embed-file" || t == "/embed-fonts@/fonts"));
  assert_eq!(full, full_again);
}

#[test]
fn configs_are_safe_to_build_concurrently() {
  let handles: Vec<_> = (0..8)
    .map(|i| std::thread::spawn(move || BuildConfiguration::for_variant(Variant::ALL[i % 2])))
    .collect();
  for (i, handle) in handles.into_iter().enumerate() {
    let config = handle.join().unwrap();
    assert_eq!(config.flags, expected_flags(Variant::ALL[i % 2].as_str()));
  }
}

// =============================================================================
// Manifests
// =============================================================================

#[test]
fn manifests_are_shared_by_all_variants() {
  // Symbol filtering never depends on the variant; the flags carry no export lists.
  for config in all_build_configs() {
    for token in &config.flags {
      assert!(!token.starts_with("EXPORTED_FUNCTIONS"));
      assert!(!token.starts_with("EXPORTED_RUNTIME_METHODS"));
    }
  }
  assert_eq!(EXPORTED_FUNCTIONS.len(), 50);
  assert_eq!(EXPORTED_RUNTIME_METHODS.len(), 19);
  assert_eq!(DEFAULT_FONT_PATHS.len(), 5);
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn serializes_with_named_fields() {
  let config = get_build_config("lite").unwrap();
  let json = serde_json::to_value(&config).unwrap();

  assert_eq!(json["variant"], "lite");
  assert_eq!(json["output_name"], "pdfium-lite");
  assert_eq!(json["export_name"], "loadPdfiumLite");
  assert_eq!(json["embed_fonts"], false);
  assert_eq!(json["flags"].as_array().unwrap().len(), config.flags.len());
}

#[test]
fn full_flags_render_as_command_line() {
  let config = get_build_config("full").unwrap();
  let line = shell_join(&config.flags);
  assert!(line.starts_with("-s WASM=1 -s MODULARIZE=1"));
  assert!(line.ends_with("-s EXPORT_NAME=loadPdfiumFull -o pdfium-full.js --embed-file /embed-fonts@/fonts"));
}
