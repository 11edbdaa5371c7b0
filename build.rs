use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Build marker logged at startup, to tell which binary is actually running.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ACTIVITIES_BUILD_ID={}", build_id);
}
