//! Browser console logging and panic reporting.
//!
//! qrcraft-core logs through `log`. On wasm32 `console_log` routes those
//! records to `console.debug`/`info`/`warn`/`error`, and the panic hook
//! prints the panic message instead of a bare `unreachable` trap.

use log::Level;

/// Most verbose level that reaches the console.
pub(crate) fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Install the panic hook and console logger. Calling it again is a no-op.
pub(crate) fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        // Fails only when a logger is already installed
        let _ = console_log::init_with_level(max_level());
    }

    // Native builds (tests, tooling) have no console; only the filter is set
    #[cfg(not(target_arch = "wasm32"))]
    log::set_max_level(max_level().to_level_filter());
}
