// File: crates/paper-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW & co., used by Skia/ICU font lookup
        println!("cargo:rustc-link-lib=advapi32");
    }
}
