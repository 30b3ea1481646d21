use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Footer copyright year, identical for server render and hydration
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
}
