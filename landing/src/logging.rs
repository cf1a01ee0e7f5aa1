// tracing -> browser console
// Developed by the SATI Consulting team (c)2025

use log::Level;

/// Route `tracing` events to the browser console.
///
/// No tracing subscriber is installed, so the `log` feature of `tracing`
/// re-emits every event as a `log` record and `console_log` prints it with the
/// matching console method. Debug builds log at DEBUG, release at INFO.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };

    if let Err(e) = console_log::init_with_level(level) {
        log::warn!("console logger already installed: {e}");
    }
}
