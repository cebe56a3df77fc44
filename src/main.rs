//! FinSight web - Main Entry Point
//!
//! Serves the navigation shell with Dioxus. Uses dioxus::serve() pattern for
//! dx serve compatibility.

use finsight_web::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use dioxus::server::axum::routing::get;

    // Print the full backtrace on panic
    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("\n=== PANIC CAUGHT ===");
        eprintln!("Panic info: {}", panic_info);
        eprintln!("Backtrace:\n{}", backtrace);
        eprintln!("=== END PANIC ===\n");
    }));

    // Initialize tracing BEFORE dioxus::serve
    finsight_web::shared::logging::init().expect("failed to initialize tracing");

    tracing::info!("Starting FinSight web...");

    dioxus::serve(|| {
        async move {
            let router =
                dioxus::server::router(App).route("/healthz", get(|| async { "ok" }));
            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] FinSight web initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
