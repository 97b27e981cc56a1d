//! Log output for hosts embedding Highlight Saver.
//!
//! The crate only emits `tracing` events; installing a subscriber is left to
//! the host. [`init`] is the default choice.

/// Installs a compact fmt subscriber. Safe to call more than once; later
/// calls (or an already-installed subscriber) win silently.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .try_init();
}
