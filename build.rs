fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // The Python extension resolves libpython symbols at import time on macOS.
    let building_python_module = std::env::var_os("CARGO_FEATURE_PYTHON").is_some();
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if building_python_module && target_os == "macos" {
        for arg in ["-undefined", "dynamic_lookup"] {
            println!("cargo:rustc-cdylib-link-arg={arg}");
        }
    }
}
