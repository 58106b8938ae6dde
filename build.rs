fn main() {
    // Shown in the footer
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    // Relay ids are read with option_env!, so a change needs a rebuild
    for key in ["EMAILJS_PUBLIC_KEY", "EMAILJS_SERVICE_ID", "EMAILJS_TEMPLATE_ID"] {
        println!("cargo:rerun-if-env-changed={key}");
    }
}
