/// Compiler flags common to both variants.
///
/// Kept as one flat token sequence: `-s` settings and bare flags are
/// interleaved and the toolchain reads them positionally.
pub const BASE_EMSCRIPTEN_FLAGS: &[&str] = &[
  // WASM output
  "-s",
  "WASM=1",
  // Module format
  "-s",
  "MODULARIZE=1",
  "-s",
  "EXPORT_ES6=1",
  // Memory: 32MB initial, 512MB ceiling
  "-s",
  "ALLOW_MEMORY_GROWTH=1",
  "-s",
  "INITIAL_MEMORY=33554432",
  "-s",
  "MAXIMUM_MEMORY=536870912",
  // Font loading goes through the virtual filesystem
  "-s",
  "FORCE_FILESYSTEM=1",
  // Runtime features
  "-s",
  "ALLOW_TABLE_GROWTH=1",
  "-s",
  "ASSERTIONS=0",
  // Ports
  "-s",
  "USE_ZLIB=1",
  "-s",
  "USE_LIBJPEG=1",
  "-s",
  "USE_LIBPNG=1",
  // Optimization
  "-O3",
  "--closure",
  "0",
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn settings_always_follow_their_marker() {
    for (i, token) in BASE_EMSCRIPTEN_FLAGS.iter().enumerate() {
      if *token == "-s" {
        let value = BASE_EMSCRIPTEN_FLAGS[i + 1];
        assert!(value.contains('='), "setting without a value: {}", value);
      }
    }
  }

  #[test]
  fn filesystem_is_forced() {
    assert!(BASE_EMSCRIPTEN_FLAGS.contains(&"FORCE_FILESYSTEM=1"));
  }

  #[test]
  fn ends_with_optimization_flags() {
    assert_eq!(&BASE_EMSCRIPTEN_FLAGS[BASE_EMSCRIPTEN_FLAGS.len() - 3..], &["-O3", "--closure", "0"]);
  }

  #[test]
  fn export_name_is_left_to_the_variant() {
    assert!(!BASE_EMSCRIPTEN_FLAGS.iter().any(|t| t.starts_with("EXPORT_NAME=")));
  }
}
