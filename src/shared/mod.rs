pub mod errors;
pub mod state;

// Server-only logging module
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

// Available in fullstack mode (both client and server)
pub mod hooks;
